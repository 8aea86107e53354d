pub mod round_classification;
pub mod tie_aggregation;
pub mod tie_status;

pub use round_classification::{
    RoundCategory, UNKNOWN_ROUND_PRIORITY, classify_round, derive_round_id,
    knockout_round_priority, order_knockout_rounds,
};
pub use tie_aggregation::{aggregate_ties, derive_tie_id};
pub use tie_status::describe_tie_status;
