// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /**
     * How long resolving a whole batch may take at most.
     * When it elapses, the batch fails with `Error::Timeout`,
     * naming all identifiers not resolved so far.
     * Without a deadline, a batch with a chained request
     * whose dependency never becomes available stays pending forever.
     */
    pub deadline: Option<Duration>,
}
