// Team formation: player attributes, roster balancing, captain selection.

pub mod balance;
pub mod captain;
pub mod player;

pub use balance::{balance_teams, team_rating, BalancedTeams, Team};
pub use captain::select_captain;
pub use player::{BattingPosition, Player, Role};
