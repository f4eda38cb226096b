use crate::errors::PiError;

/// Validates the command line: exactly one positional argument holding the
/// requested digit count as a positive integer. Anything else is rejected
/// here, before any of the series machinery runs.
pub fn parse_digits<I>(args: I) -> Result<usize, PiError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let raw = args
        .next()
        .ok_or_else(|| PiError::InvalidDigits("missing digit count argument".into()))?;
    if args.next().is_some() {
        return Err(PiError::InvalidDigits("expected exactly one argument".into()));
    }

    let digits = raw
        .parse::<usize>()
        .map_err(|_| PiError::InvalidDigits(format!("'{}' is not a valid integer", raw)))?;
    if digits == 0 {
        return Err(PiError::InvalidDigits("digit count must be greater than 0".into()));
    }
    Ok(digits)
}
