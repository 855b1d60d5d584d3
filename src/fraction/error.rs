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

use std::num::ParseIntError;

use thiserror::Error;

/// 分数运算的错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    /// 分母为零，或除数（倒数）为零
    #[error("denominator cannot be zero")]
    DivisionByZero,
}

/// 解析 `<整数>/<整数>` 文本时的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("expected `<integer>/<integer>`, found {0:?}")]
    MissingSlash(String),
    #[error("invalid numerator: {0}")]
    Numerator(#[source] ParseIntError),
    #[error("invalid denominator: {0}")]
    Denominator(#[source] ParseIntError),
    #[error(transparent)]
    Fraction(#[from] FractionError),
}
