/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::str::FromStr;

use crate::{Permutation, PermutationError};

/// How to render a permutation.  Entries are always shown 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `3 1 2`
    #[default]
    OneLine,
    /// `( 3 2 1 )`
    Cycles,
    /// One-line notation, then cycle notation on the next line.
    Both,
}

/// A permutation paired with the [`Notation`] to display it in.
///
/// Returned by [`Permutation::display`].
#[derive(Debug, Clone, Copy)]
pub struct Displayed<'a> {
    perm: &'a Permutation,
    notation: Notation,
}

impl Permutation {
    pub fn display(&self, notation: Notation) -> Displayed<'_>
    { Displayed { perm: self, notation } }

    /// Draw the permutation as a grid, with the largest value on the top row.
    ///
    /// ```rust
    /// use perm_pattern::Permutation;
    ///
    /// let p = Permutation::from_sequence(&[2, 0, 1]).unwrap();
    /// assert_eq!(p.plot(), "*  \n  *\n * ");
    /// ```
    pub fn plot(&self) -> String
    {
        let n = self.len();
        (0..n).rev()
            .map(|value| {
                self.iter()
                    .map(|v| if v == value { '*' } else { ' ' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn write_one_line(perm: &Permutation, f: &mut fmt::Formatter<'_>) -> fmt::Result
{
    let mut first = true;
    for v in perm {
        if !first {
            f.write_str(" ")?;
        }
        first = false;
        write!(f, "{}", v + 1)?;
    }
    Ok(())
}

fn write_cycles(perm: &Permutation, f: &mut fmt::Formatter<'_>) -> fmt::Result
{
    let mut first = true;
    for cycle in perm.cycles() {
        if !first {
            f.write_str(" ")?;
        }
        first = false;
        f.write_str("(")?;
        for v in cycle {
            write!(f, " {}", v + 1)?;
        }
        f.write_str(" )")?;
    }
    Ok(())
}

impl fmt::Display for Displayed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::OneLine => write_one_line(self.perm, f),
            Notation::Cycles => write_cycles(self.perm, f),
            Notation::Both => {
                write_one_line(self.perm, f)?;
                f.write_str("\n")?;
                write_cycles(self.perm, f)
            },
        }
    }
}

/// One-line notation.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_one_line(self, f)
    }
}

/// Parses a list of distinct integers and standardizes it.
///
/// The list may be separated by whitespace and/or commas (`"3 1 2"`, `"30,10,20"`).
/// Without any separator, each character is read as one digit (`"312"`).
impl FromStr for Permutation {
    type Err = PermutationError;

    fn from_str(s: &str) -> Result<Permutation, PermutationError> {
        let s = s.trim();
        let tokens: Vec<&str> = if s.contains(|c: char| c == ',' || c.is_whitespace()) {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect()
        } else {
            s.char_indices().map(|(i, c)| &s[i..i + c.len_utf8()]).collect()
        };

        let entries = tokens.iter()
            .map(|token| token.parse::<i64>().map_err(|_| PermutationError::Parse(token.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Permutation::from_sequence(&entries)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::test_util::{arb_permutation, perm};
    use proptest::prelude::*;

    #[test]
    fn notations() {
        let p = perm(&[1, 2, 0, 4, 3]);
        assert_eq!(p.to_string(), "2 3 1 5 4");
        assert_eq!(p.display(Notation::OneLine).to_string(), "2 3 1 5 4");
        assert_eq!(p.display(Notation::Cycles).to_string(), "( 3 1 2 ) ( 5 4 )");
        assert_eq!(
            p.display(Notation::Both).to_string(),
            "2 3 1 5 4\n( 3 1 2 ) ( 5 4 )",
        );
        assert_eq!(Notation::default(), Notation::OneLine);
        assert_eq!(Permutation::identity(0).to_string(), "");
    }

    #[test]
    fn plot() {
        assert_eq!(perm(&[1, 0]).plot(), "* \n *");
        assert_eq!(Permutation::identity(0).plot(), "");
    }

    #[test]
    fn parse() {
        assert_eq!("3 1 2".parse::<Permutation>(), Ok(perm(&[2, 0, 1])));
        assert_eq!("312".parse::<Permutation>(), Ok(perm(&[2, 0, 1])));
        assert_eq!(" 30, 10 ,20 ".parse::<Permutation>(), Ok(perm(&[2, 0, 1])));
        assert_eq!("".parse::<Permutation>(), Ok(Permutation::identity(0)));
        assert_eq!("3 3".parse::<Permutation>(), Err(PermutationError::NotDistinct));
        assert_eq!("3 x".parse::<Permutation>(), Err(PermutationError::Parse("x".to_string())));
    }

    proptest! {
        #[test]
        fn one_line_parses_back(p in arb_permutation(0..15)) {
            prop_assert_eq!(p.to_string().parse::<Permutation>(), Ok(p));
        }
    }
}
