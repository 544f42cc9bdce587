pub mod config;
pub mod error;
pub mod types;

pub use config::{
    BudgetFigures, ChatConfig, ForemanConfig, GeneralConfig, PortfolioConfig, ProjectFigures,
    TeamFigures, TimelineFigures,
};
pub use error::{ForemanError, Result};
pub use types::{Money, SignedPercent};
