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



//! # fraction
//!
//! 提供定长（`i32`）精确分数运算，所有结果自动化简为最简分数
//!
//! # 核心功能
//! - 命名运算 [`Fraction::add`]、[`Fraction::subtract`]、[`Fraction::multiply`]、[`Fraction::divide`]
//! - 原地运算与运算符重载 (`+`, `-`, `*`, `/`, `+=` 等)
//! - 文本格式 `分子/分母` 的输出与解析
//! - 结果超出 `i32` 范围时，使用 shrink 将结果转化为范围内最接近的最简分数

mod error;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
pub(crate) mod utils;

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

pub use error::{FractionError, ParseFractionError};

/// 分数类型，使用 `i32` 存储分子分母
///
/// 始终维持最简形式：分母为正，符号由分子携带，零为 `0/1`。
///
/// # 示例 - 基础使用
/// ```
/// use fraction32::Fraction;
///
/// let a = Fraction::new(3, 4)?; // 3/4
/// let b = Fraction::from(2);    // 2/1
/// assert_eq!(a + b, Fraction::new(11, 4)?);
/// # Ok::<(), fraction32::FractionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    nume: i32,
    deno: i32,
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Fraction {
    pub const ZERO: Self = Self { nume: 0, deno: 1 };
    pub const ONE: Self = Self { nume: 1, deno: 1 };

    /// 创建新分数，自动化简为最简形式
    ///
    /// # 参数
    /// - `nume`: 分子
    /// - `deno`: 分母 (非零)
    ///
    /// # Errors
    /// 分母为零时返回 [`FractionError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let f = Fraction::new(4, -8)?;
    /// assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    ///
    /// assert_eq!(Fraction::new(1, 0), Err(FractionError::DivisionByZero));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn new(nume: i32, deno: i32) -> Result<Self, FractionError> {
        if deno == 0 {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::reduced(nume as i64, deno as i64))
    }

    /// 化简 `nume / deno`，`deno` 必须非零
    ///
    /// 运算在 `i64` 中进行，约分后仍超出 `i32` 时由 [`utils::shrink`] 近似
    fn reduced(nume: i64, deno: i64) -> Self {
        debug_assert!(deno != 0, "denominator must be checked before reducing");
        if nume == 0 {
            return Self::ZERO;
        }

        let sign: i64 = if (nume < 0) != (deno < 0) { -1 } else { 1 };
        let nume_limit = if sign < 0 { utils::NEG_LIMITER } else { utils::LIMITER };
        let (nume, deno) = (nume.unsigned_abs(), deno.unsigned_abs());
        let gcd_val = utils::gcd(nume, deno);
        let (nume, deno) = utils::shrink(nume / gcd_val, deno / gcd_val, nume_limit);

        // a negative numerator may be as large as 2^31
        Self {
            nume: (nume as i64 * sign) as i32,
            deno: deno as i32,
        }
    }

    fn wide(self) -> (i64, i64) {
        (self.nume as i64, self.deno as i64)
    }

    /// 分子，携带符号
    pub fn numerator(&self) -> i32 {
        self.nume
    }

    /// 分母，恒为正
    pub fn denominator(&self) -> i32 {
        self.deno
    }

    /// 覆盖分子后重新化简
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let mut f = Fraction::new(1, 6)?;
    /// f.set_numerator(4);
    /// assert_eq!(f, Fraction::new(2, 3)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn set_numerator(&mut self, nume: i32) {
        *self = Self::reduced(nume as i64, self.deno as i64);
    }

    /// 覆盖分母后重新化简
    ///
    /// # Errors
    /// `deno == 0` 时返回 [`FractionError::DivisionByZero`]，原值不变
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let mut f = Fraction::new(2, 3)?;
    /// f.set_denominator(-4)?;
    /// assert_eq!(f, Fraction::new(-1, 2)?);
    ///
    /// assert_eq!(f.set_denominator(0), Err(FractionError::DivisionByZero));
    /// assert_eq!(f, Fraction::new(-1, 2)?);
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn set_denominator(&mut self, deno: i32) -> Result<(), FractionError> {
        if deno == 0 {
            return Err(FractionError::DivisionByZero);
        }
        *self = Self::reduced(self.nume as i64, deno as i64);
        Ok(())
    }

    /// 原地加法 `self += rhs`，返回 `self` 以便链式调用
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let mut a = Fraction::new(1, 2)?;
    /// a.add_in_place(Fraction::new(1, 3)?).add_in_place(Fraction::new(1, 6)?);
    /// assert_eq!(a, Fraction::ONE);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::reduced(a * d + c * b, b * d);
        self
    }

    /// 原地减法 `self -= rhs`
    pub fn sub_in_place(&mut self, rhs: Self) -> &mut Self {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::reduced(a * d - c * b, b * d);
        self
    }

    /// 原地乘法 `self *= rhs`
    pub fn mul_in_place(&mut self, rhs: Self) -> &mut Self {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::reduced(a * c, b * d);
        self
    }

    /// 原地除法 `self /= rhs`
    ///
    /// # Errors
    /// `rhs` 为零时返回 [`FractionError::DivisionByZero`]，`self` 不变
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let mut a = Fraction::new(1, 2)?;
    /// a.div_in_place(Fraction::new(3, 4)?)?;
    /// assert_eq!(a, Fraction::new(2, 3)?);
    ///
    /// assert_eq!(a.div_in_place(Fraction::ZERO).err(), Some(FractionError::DivisionByZero));
    /// assert_eq!(a, Fraction::new(2, 3)?);
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn div_in_place(&mut self, rhs: Self) -> Result<&mut Self, FractionError> {
        if rhs.nume == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::reduced(a * d, b * c);
        Ok(self)
    }

    /// 加法，返回新值
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let sum = Fraction::new(1, 2)?.add(Fraction::new(3, 4)?);
    /// assert_eq!(sum, Fraction::new(5, 4)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        let mut lhs = self;
        lhs.add_in_place(rhs);
        lhs
    }

    /// 减法，返回新值
    pub fn subtract(self, rhs: Self) -> Self {
        let mut lhs = self;
        lhs.sub_in_place(rhs);
        lhs
    }

    /// 乘法，返回新值
    pub fn multiply(self, rhs: Self) -> Self {
        let mut lhs = self;
        lhs.mul_in_place(rhs);
        lhs
    }

    /// 除法，返回新值
    ///
    /// # Errors
    /// `rhs` 为零时返回 [`FractionError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a.divide(Fraction::new(3, 4)?)?, Fraction::new(2, 3)?);
    /// assert_eq!(a.divide(Fraction::new(0, 5)?), Err(FractionError::DivisionByZero));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn divide(self, rhs: Self) -> Result<Self, FractionError> {
        let mut lhs = self;
        lhs.div_in_place(rhs)?;
        Ok(lhs)
    }

    /// 获取倒数
    ///
    /// # Errors
    /// 零没有倒数，返回 [`FractionError::DivisionByZero`]
    ///
    /// 分子为 `i32::MIN` 时倒数的分母无法存储，结果按溢出规则近似
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(-2, 3)?;
    /// assert_eq!(a.reciprocal()?, Fraction::new(-3, 2)?);
    /// assert!(Fraction::ZERO.reciprocal().is_err());
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn reciprocal(&self) -> Result<Self, FractionError> {
        if self.nume == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let (nume, deno) = self.wide();
        Ok(Self::reduced(deno, nume))
    }

    /// 获取绝对值
    ///
    /// `i32::MIN` 分子没有对应的正数，结果按溢出规则近似
    pub fn abs(&self) -> Self {
        if self.is_negative() { -*self } else { *self }
    }

    /// 符号：`-1`、`0` 或 `1`
    pub fn signum(&self) -> i32 {
        self.nume.signum()
    }

    /// 零值返回 true
    pub fn is_zero(&self) -> bool {
        self.nume == 0
    }

    /// 正值返回 true，零不算正值
    pub fn is_positive(&self) -> bool {
        self.nume > 0
    }

    /// 负值返回 true
    pub fn is_negative(&self) -> bool {
        self.nume < 0
    }

    /// 分母为 1 时返回 true（包括零）
    pub fn is_integer(&self) -> bool {
        self.deno == 1
    }

    /// 向零取整的整数部分
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// assert_eq!(Fraction::new(7, 2)?.trunc(), 3);
    /// assert_eq!(Fraction::new(-7, 2)?.trunc(), -3);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn trunc(&self) -> i32 {
        self.nume / self.deno
    }

    /// 转换为 `f64` 近似值
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// assert_eq!(Fraction::new(1, 4)?.to_f64(), 0.25);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn to_f64(&self) -> f64 {
        self.nume as f64 / self.deno as f64
    }
}

impl<T: Into<Fraction>> Add<T> for Fraction {
    type Output = Self;

    /// 分数加法，同 [`Fraction::add`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// let b = Fraction::new(1, 3)?;
    /// assert_eq!(a + b, Fraction::new(5, 6)?);
    /// assert_eq!(a + 1, Fraction::new(3, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn add(self, rhs: T) -> Self::Output {
        Fraction::add(self, rhs.into())
    }
}

impl<T: Into<Fraction>> Sub<T> for Fraction {
    type Output = Self;

    /// 分数减法，同 [`Fraction::subtract`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a - Fraction::new(3, 4)?, Fraction::new(-1, 4)?);
    /// assert_eq!(a - 1, Fraction::new(-1, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn sub(self, rhs: T) -> Self::Output {
        self.subtract(rhs.into())
    }
}

impl<T: Into<Fraction>> Mul<T> for Fraction {
    type Output = Self;

    /// 分数乘法，同 [`Fraction::multiply`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a * Fraction::new(3, 4)?, Fraction::new(3, 8)?);
    /// assert_eq!(a * 4, Fraction::from(2));
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        self.multiply(rhs.into())
    }
}

impl<T: Into<Fraction>> Div<T> for Fraction {
    type Output = Self;

    /// 分数除法，同 [`Fraction::divide`]
    ///
    /// # Panics
    /// 除数为零时 panic，需要处理错误时请使用 [`Fraction::divide`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a / Fraction::new(3, 4)?, Fraction::new(2, 3)?);
    /// assert_eq!(a / 3, Fraction::new(1, 6)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn div(self, rhs: T) -> Self::Output {
        match self.divide(rhs.into()) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide {self} by zero"),
        }
    }
}

impl<T: Into<Fraction>> AddAssign<T> for Fraction {
    /// 实现 `+=` 操作
    ///
    /// 在数值上与 `+` 的行为相同
    ///
    /// # 示例
    /// ```rust
    /// # use fraction32::Fraction;
    /// let mut a = Fraction::new(1, 2)?;
    /// a += Fraction::new(3, 4)?;
    /// a += 1;
    /// assert_eq!(a, Fraction::new(9, 4)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn add_assign(&mut self, rhs: T) {
        self.add_in_place(rhs.into());
    }
}

impl<T: Into<Fraction>> SubAssign<T> for Fraction {
    /// 实现 `-=` 操作
    fn sub_assign(&mut self, rhs: T) {
        self.sub_in_place(rhs.into());
    }
}

impl<T: Into<Fraction>> MulAssign<T> for Fraction {
    /// 实现 `*=` 操作
    fn mul_assign(&mut self, rhs: T) {
        self.mul_in_place(rhs.into());
    }
}

impl<T: Into<Fraction>> DivAssign<T> for Fraction {
    /// 实现 `/=` 操作
    ///
    /// # Panics
    /// 除数为零时 panic，需要处理错误时请使用 [`Fraction::div_in_place`]
    fn div_assign(&mut self, rhs: T) {
        if self.div_in_place(rhs.into()).is_err() {
            panic!("attempt to divide {self} by zero");
        }
    }
}

impl Neg for Fraction {
    type Output = Self;

    /// 取反
    ///
    /// 分子为 `i32::MIN` 时正数无法存储，结果按溢出规则近似为 `i32::MAX` 一侧的最近分数
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(-a, Fraction::new(-1, 2)?);
    /// assert_eq!(-Fraction::ZERO, Fraction::ZERO);
    /// assert_eq!(-Fraction::from(i32::MIN), Fraction::from(i32::MAX));
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn neg(self) -> Self::Output {
        match self.nume.checked_neg() {
            Some(nume) => Self { nume, deno: self.deno },
            None => Self::reduced(-(self.nume as i64), self.deno as i64),
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// 交叉相乘比较，在 `i64` 中进行，不会溢出
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// # use std::cmp::Ordering;
    /// let a = Fraction::new(3, 4)?;
    /// let b = Fraction::new(2, 3)?;
    /// assert_eq!(a.cmp(&b), Ordering::Greater);
    /// assert!(Fraction::new(-1, 2)? < Fraction::ZERO);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        (a * d).cmp(&(c * b))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Self::reduced(value as i64, 1)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, i8, i16, i32);

macro_rules! impl_from_for_float {
    ($($t:ty),*) => {
        $(
            impl From<Fraction> for $t {
                fn from(value: Fraction) -> Self {
                    value.nume as $t / value.deno as $t
                }
            }
        )*
    };
}

impl_from_for_float!(f32, f64);
