// A high-precision fraction lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use super::{Fraction, ParseFractionError};

impl Display for Fraction {
    /// 格式化输出为 `分子/分母`，整数与零同样保留分母
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// assert_eq!(Fraction::new(4, 8)?.to_string(), "1/2");
    /// assert_eq!(Fraction::new(1, -2)?.to_string(), "-1/2");
    /// assert_eq!(Fraction::from(5).to_string(), "5/1");
    /// assert_eq!(Fraction::ZERO.to_string(), "0/1");
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.nume, self.deno)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// 解析 `<整数>/<整数>`，两个整数前后允许空白，结果自动化简
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError, ParseFractionError};
    /// let f: Fraction = " 6 / -8 ".parse()?;
    /// assert_eq!(f, Fraction::new(-3, 4)?);
    ///
    /// assert!(matches!("3".parse::<Fraction>(), Err(ParseFractionError::MissingSlash(_))));
    /// assert_eq!(
    ///     "3/0".parse::<Fraction>(),
    ///     Err(ParseFractionError::Fraction(FractionError::DivisionByZero))
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (nume, deno) = s
            .split_once('/')
            .ok_or_else(|| ParseFractionError::MissingSlash(s.to_owned()))?;
        let nume = nume.trim().parse::<i32>().map_err(ParseFractionError::Numerator)?;
        let deno = deno.trim().parse::<i32>().map_err(ParseFractionError::Denominator)?;
        Ok(Fraction::new(nume, deno)?)
    }
}

impl Fraction {
    /// 从文本解析分数，同 [`FromStr`]
    ///
    /// # Errors
    /// 文本不是 `<整数>/<整数>` 或分母为零时返回 [`ParseFractionError`]
    pub fn parse(text: &str) -> Result<Self, ParseFractionError> {
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FractionError;

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(Fraction::parse("1/2"), Fraction::new(1, 2).map_err(ParseFractionError::from));
        assert_eq!(Fraction::parse("\t-3 /\n 9 "), Fraction::new(-1, 3).map_err(ParseFractionError::from));
        assert_eq!(Fraction::parse("+4/-6"), Fraction::new(-2, 3).map_err(ParseFractionError::from));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Fraction::parse(""), Err(ParseFractionError::MissingSlash(String::new())));
        assert!(matches!(Fraction::parse("a/2"), Err(ParseFractionError::Numerator(_))));
        assert!(matches!(Fraction::parse("1/"), Err(ParseFractionError::Denominator(_))));
        assert!(matches!(Fraction::parse("1/2/3"), Err(ParseFractionError::Denominator(_))));
        assert!(matches!(Fraction::parse("1 2/3"), Err(ParseFractionError::Numerator(_))));
        assert!(matches!(Fraction::parse("2147483648/1"), Err(ParseFractionError::Numerator(_))));
        assert_eq!(
            Fraction::parse("-7/0"),
            Err(ParseFractionError::Fraction(FractionError::DivisionByZero))
        );
    }

    #[test]
    fn test_display_then_parse() {
        for (nume, deno) in [(0, 7), (4, 8), (-9, 12), (5, -1), (i32::MAX, 2), (-1, i32::MAX)] {
            let f = Fraction::new(nume, deno).unwrap();
            assert_eq!(Fraction::parse(&f.to_string()), Ok(f));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = Fraction::parse("3").unwrap_err();
        assert_eq!(err.to_string(), "expected `<integer>/<integer>`, found \"3\"");
        let err = Fraction::parse("3/0").unwrap_err();
        assert_eq!(err.to_string(), "denominator cannot be zero");
    }
}
