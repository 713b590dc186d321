mod mass;
mod runner;

pub use mass::parse_mass;
pub use runner::{
    AcceptedIngredient, CONFIRM_PROMPT, DECLINED_MESSAGE, INVALID_MASS_MESSAGE, QUERY_PROMPT,
    Session, SessionReport, SkipReason, StepOutcome,
};
