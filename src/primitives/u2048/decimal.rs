//! Base-10 rendering for `U2048`
//!
//! Decimal digits are produced without any big-integer division by ten.
//! Instead the renderer:
//!
//! 1. builds the table of powers of ten that do not exceed the value,
//!    each power obtained from the previous one with four additions
//!    (`2p`, `4p`, `8p`, `8p + 2p`);
//! 2. walks the table from the highest power down, finding each digit by
//!    repeatedly adding the current power to a running sum while it stays
//!    at or below the value.
//!
//! Since 2²⁰⁴⁸ < 10⁶¹⁷, the table never holds more than 617 entries.

use crate::primitives::u2048::U2048;

use log::debug;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

impl U2048 {
    /// Returns `p * 10` using four additions.
    fn times_ten(p: U2048) -> U2048 {
        let two = p + p;
        let four = two + two;
        let eight = four + four;

        eight + two
    }

    /// Returns the powers of ten `10⁰..=10ᵏ` where `10ᵏ` is the largest
    /// power not exceeding `self`. Zero yields the single power `10⁰`.
    fn decimal_powers(&self) -> Vec<U2048> {
        let mut powers = Vec::with_capacity(Self::MAX_DECIMAL_DIGITS);
        let mut current = U2048::ONE;
        powers.push(current);

        while powers.len() < Self::MAX_DECIMAL_DIGITS && current <= *self {
            current = Self::times_ten(current);
            powers.push(current);
        }

        if powers.len() > 1 && *self < current {
            powers.pop();
        }

        debug!("rendering {} decimal digits", powers.len());

        powers
    }

    /// Writes the decimal digits of the value into `out`.
    fn write_digits<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut sum = U2048::ZERO;

        for power in self.decimal_powers().iter().rev() {
            let mut digit = 0u8;

            while digit < 9 {
                // Near 10^616 the trial can pass 2^2048; a carry out means
                // it is larger than any representable value.
                let (trial, carry) = sum.overflowing_add(*power);
                if carry || *self < trial {
                    break;
                }
                sum = trial;
                digit += 1;
            }

            out.write_char((b'0' + digit) as char)?;
        }

        Ok(())
    }

    /// Writes the decimal representation to `sink`, without a trailing
    /// newline.
    pub fn write_decimal<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }

    /// Prints the decimal representation to standard output, without a
    /// trailing newline.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl Display for U2048 {
    /// Formats the value in base 10.
    ///
    /// Example:
    /// `U2048::from(42u8)` formats as `42`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(Self::MAX_DECIMAL_DIGITS);
        self.write_digits(&mut digits)?;

        f.pad_integral(true, "", &digits)
    }
}
