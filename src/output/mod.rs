mod format;
mod summary;

pub(crate) use format::NumberFormat;
pub(crate) use summary::{
    RunOutcome, format_latest_json, format_latest_text, format_outcome_json, format_outcome_text,
};
