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

use std::ops::Rem;

/// 正分子与分母的上限（`i32::MAX`）
pub(crate) const LIMITER: u64 = i32::MAX as u64;
/// 负分子绝对值的上限（`i32::MIN` 的绝对值）
pub(crate) const NEG_LIMITER: u64 = i32::MIN.unsigned_abs() as u64;

/// 辗转相除求最大公约数，`gcd(0, x) == x`
pub(crate) fn gcd<T>(a: T, b: T) -> T
where
    T: Rem<Output = T> + From<u8> + Eq + Copy,
{
    let (mut a, mut b) = (a, b);
    while b != T::from(0u8) {
        (a, b) = (b, a % b);
    }
    a
}

/// 将已约分的 `nume / deno` 收缩到可存储的范围内
///
/// 分子上限为 `nume_limit`（负数取 [`NEG_LIMITER`]，否则取 [`LIMITER`]），
/// 分母上限为 [`LIMITER`]。范围内的输入原样返回；超出范围时沿连分数展开，
/// 在最后一个可表示的渐近分数与其后的中间分数之间取误差较小者。
/// 返回值仍是最简分数。
///
/// 输入必须已经约分且 `deno != 0`。
pub(crate) fn shrink(nume: u64, deno: u64, nume_limit: u64) -> (u32, u32) {
    if nume <= nume_limit && deno <= LIMITER {
        return (nume as u32, deno as u32);
    }

    let (limit_p, limit_q) = (nume_limit as u128, LIMITER as u128);
    let (big_n, big_d) = (nume as u128, deno as u128);

    // (p_0 / q_0, p_1 / q_1): the last two convergents, seeded with 0/1 and 1/0
    let (mut p_0, mut q_0, mut p_1, mut q_1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (big_n, big_d);
    while d != 0 {
        let a = n / d;
        let (p_2, q_2) = (p_0 + a * p_1, q_0 + a * q_1);
        if p_2 > limit_p || q_2 > limit_q {
            break;
        }

        (p_0, q_0, p_1, q_1) = (p_1, q_1, p_2, q_2);
        (n, d) = (d, n - a * d);
    }

    // largest k keeping p_0 + k * p_1 and q_0 + k * q_1 within their limits
    let k = [(p_0, p_1, limit_p), (q_0, q_1, limit_q)]
        .into_iter()
        .filter(|&(_, step, _)| step != 0)
        .map(|(base, step, limit)| (limit - base) / step)
        .min()
        .unwrap_or(0);
    let (p_2, q_2) = (p_0 + k * p_1, q_0 + k * q_1);

    // |p/q - N/D| * D == |p * D - N * q| / q
    let d_1 = (p_1 * big_d).abs_diff(big_n * q_1);
    let d_2 = (p_2 * big_d).abs_diff(big_n * q_2);
    let (p, q) = if d_1 * q_2 <= d_2 * q_1 { (p_1, q_1) } else { (p_2, q_2) };

    tracing::debug!(nume, deno, approx_nume = p as u64, approx_deno = q as u64, "fraction out of i32 range, approximated");

    (p as u32, q as u32)
}
