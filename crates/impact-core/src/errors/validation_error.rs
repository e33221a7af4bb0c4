/// Input validation failures raised by the form-layer checks.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("required field is empty: {field}")]
    EmptyField { field: String },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: String },

    #[error("{field} out of range [{min}, {max}] (got {value})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("estimate is not ordered: optimistic {optimistic} <= most likely {most_likely} <= pessimistic {pessimistic} fails")]
    InvertedEstimate {
        optimistic: f64,
        most_likely: f64,
        pessimistic: f64,
    },
}
