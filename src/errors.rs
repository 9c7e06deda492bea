use fractic_server_error::{define_client_error, define_internal_error};

// Config-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });

// Input-related.
define_client_error!(
    TooManySpaces,
    "Input '{input}' contained too many spaces. It should only contain the value and an optional currency.",
    { input: &str }
);
define_client_error!(
    OpenSumWithCurrency,
    "For transactions being kept open with trailing '+' operator, no additionally specified currency is allowed."
);
define_client_error!(
    InvalidSummand,
    "Tried to sum up values due to '+' operator found, failed at value '{value}'.",
    { value: &str }
);
define_client_error!(
    InvalidFactor,
    "Tried to multiply values due to '*' operator found, failed at value '{value}'.",
    { value: &str }
);
define_client_error!(InvalidFactorCount, "Expected exactly two multiplicators ('a*b').");
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    InvalidDateLiteral,
    "Input '{input}' did not match pattern 'YYYY-MM-DD'.",
    { input: &str }
);

// Session-related.
define_client_error!(
    NoActiveTransaction,
    "There is no active transaction, you might need to start a transaction first."
);
define_client_error!(
    StepOutOfRange,
    "All data for this transaction has already been gathered (step {step} of {total}).",
    { step: usize, total: usize }
);
define_internal_error!(
    TransactionIncomplete,
    "Not all data for this transaction has been gathered ({debug}).",
    { debug: &str }
);
define_internal_error!(
    MissingField,
    "Transaction is missing captured field '{field}'.",
    { field: &str }
);
define_internal_error!(
    MissingHint,
    "Transaction has no prompt for its current step ({debug}).",
    { debug: &str }
);
