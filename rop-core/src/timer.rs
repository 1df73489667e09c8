// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Suspend the current task for `duration` on the configured runtime.
#[cfg(feature = "runtime-tokio")]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration` on the configured runtime.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub async fn sleep(duration: Duration) {
    let _fired_at = async_io::Timer::after(duration).await;
}
