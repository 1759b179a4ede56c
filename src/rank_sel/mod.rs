/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The two index structures that make up the succinct bit vector: the
//! Rank9 table ([`rank9`]) and the Select9 inventories ([`select9`]).

pub mod rank9;
pub mod select9;

pub(crate) use rank9::RankIndex;
pub(crate) use select9::SelectIndex;
