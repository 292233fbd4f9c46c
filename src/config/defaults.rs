// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: Auto-hide duration, line clamp, stacking limit
//! - **Lifecycle**: Exit fallback and animation timings
//! - **Effects**: Chime tone and vibration length
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default time a notification stays visible before auto-hiding (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Default maximum number of message lines shown before clamping.
pub const DEFAULT_MAX_LINES: u32 = 3;

/// Default number of live notifications per container before the queue strategy applies.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Removal deadline after an exit starts, used when no animation-completion
/// signal arrives (in milliseconds).
pub const EXIT_FALLBACK_MS: u64 = 450;

/// Length of the enter and exit fade (in milliseconds).
/// Must stay below [`EXIT_FALLBACK_MS`] so the animation usually wins.
pub const ENTER_EXIT_ANIMATION_MS: u64 = 350;

/// Interval of the render/tick subscription while notifications are live
/// (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Vibration length requested when `vibrate` is enabled (in milliseconds).
pub const VIBRATION_MS: u64 = 100;

/// Chime tone frequency (Hz).
pub const CHIME_FREQUENCY_HZ: f32 = 800.0;

/// Chime length (in milliseconds).
pub const CHIME_DURATION_MS: u64 = 200;

/// Chime gain at onset.
pub const CHIME_START_GAIN: f32 = 0.3;

/// Chime gain at the end of the exponential decay.
pub const CHIME_END_GAIN: f32 = 0.01;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

/// Capacity of the channel between diagnostics handles and the collector.
/// Holds a full frame of events for a crowded container.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(DEFAULT_MAX_LINES > 0);
    assert!(DEFAULT_MAX_VISIBLE > 0);
    assert!(ENTER_EXIT_ANIMATION_MS < EXIT_FALLBACK_MS);
    assert!(FRAME_INTERVAL_MS < ENTER_EXIT_ANIMATION_MS);
    assert!(CHIME_END_GAIN < CHIME_START_GAIN);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
