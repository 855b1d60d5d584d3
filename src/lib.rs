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

//! # fraction32
//!
//! 以 `i32` 分子分母表示的精确分数，所有运算后自动化简为最简分数。
//!
//! ```
//! use fraction32::Fraction;
//!
//! let a = Fraction::new(1, 2)?;
//! let b: Fraction = "3/4".parse()?;
//! assert_eq!((a + b).to_string(), "5/4");
//! assert_eq!(a.divide(b)?, Fraction::new(2, 3)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod fraction;

pub use fraction::{Fraction, FractionError, ParseFractionError};
