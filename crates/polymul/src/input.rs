//! Input parsing for the two-polynomial batch format.
//!
//! The format is whitespace-separated and free to span lines: two degrees
//! `n m`, then n+1 coefficients of A and m+1 coefficients of B, lowest
//! power first. Tokens past the final coefficient are ignored.

use std::io::Read;

use polymul_core::constants::MAX_COEFF_LEN;
use polymul_core::PolyError;

/// Read and parse both polynomials from a reader.
pub fn read_polynomials<R: Read>(reader: &mut R) -> Result<(Vec<i64>, Vec<i64>), PolyError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| PolyError::InvalidInput(format!("failed to read input: {e}")))?;
    parse_polynomials(&text)
}

/// Parse both polynomials from whitespace-separated text.
pub fn parse_polynomials(text: &str) -> Result<(Vec<i64>, Vec<i64>), PolyError> {
    let mut tokens = text.split_whitespace();

    let n = parse_degree(tokens.next(), "A")?;
    let m = parse_degree(tokens.next(), "B")?;

    let a = parse_coefficients(&mut tokens, n + 1, "A")?;
    let b = parse_coefficients(&mut tokens, m + 1, "B")?;
    Ok((a, b))
}

fn parse_degree(token: Option<&str>, name: &str) -> Result<usize, PolyError> {
    let token = token
        .ok_or_else(|| PolyError::InvalidInput(format!("missing degree of polynomial {name}")))?;
    let degree: usize = token.parse().map_err(|_| {
        PolyError::InvalidInput(format!(
            "degree of polynomial {name} must be a non-negative integer, got '{token}'"
        ))
    })?;
    if degree >= MAX_COEFF_LEN {
        return Err(PolyError::InvalidInput(format!(
            "degree of polynomial {name} is {degree}, maximum supported is {}",
            MAX_COEFF_LEN - 1
        )));
    }
    Ok(degree)
}

fn parse_coefficients<'a, I>(
    tokens: &mut I,
    count: usize,
    name: &str,
) -> Result<Vec<i64>, PolyError>
where
    I: Iterator<Item = &'a str>,
{
    let mut coeffs = Vec::with_capacity(count);
    for i in 0..count {
        let token = tokens.next().ok_or_else(|| {
            PolyError::InvalidInput(format!(
                "polynomial {name} needs {count} coefficients, found {i}"
            ))
        })?;
        let value: i64 = token.parse().map_err(|_| {
            PolyError::InvalidInput(format!(
                "coefficient {i} of polynomial {name} is not an integer: '{token}'"
            ))
        })?;
        coeffs.push(value);
    }
    Ok(coeffs)
}
