//! Hidden controls: multi-tap zones and the vertical swipe.
//!
//! A zone is a screen region plus a required tap count inside a sliding time
//! window. The window is anchored to the most recent tap; a tap arriving
//! after the window lapses restarts the count at one rather than inheriting
//! the stale total. Zones are registered independently and unprioritized:
//! every zone inspects every tap, so a tap landing where regions overlap may
//! legitimately fire more than one action.
//!
//! Geometry is anchor-based and resolved against the screen size passed in
//! with each tap, so a terminal resize can never leave a zone stale.


use std::time::{Duration, Instant};

/// Default sliding window for counting taps.
pub const TAP_WINDOW: Duration = Duration::from_millis(500);

/// Minimum vertical travel, in rows, for a swipe to register.
pub const SWIPE_MIN_ROWS: u16 = 3;

/// Actions bound to the hidden controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Double-tap top-left.
    PickLockBackground,
    /// Double-tap top-right.
    PickHomeBackground,
    /// Triple-tap top-center.
    OpenSettings,
    /// Triple-tap the bottom band while unlocked.
    Relock,
    /// Vertical swipe anywhere.
    SetReference,
}

/// Zone rectangle expressed relative to a screen edge so it tracks resizes.
#[derive(Debug, Clone, Copy)]
pub enum ZoneLayout {
    TopLeft { w: u16, h: u16 },
    TopRight { w: u16, h: u16 },
    TopCenter { w: u16, h: u16 },
    BottomBand { h: u16 },
}

impl ZoneLayout {
    fn contains(&self, x: u16, y: u16, cols: u16, rows: u16) -> bool {
        match *self {
            ZoneLayout::TopLeft { w, h } => x < w && y < h,
            ZoneLayout::TopRight { w, h } => x >= cols.saturating_sub(w) && y < h,
            ZoneLayout::TopCenter { w, h } => {
                let left = cols.saturating_sub(w) / 2;
                x >= left && x < left.saturating_add(w) && y < h
            }
            ZoneLayout::BottomBand { h } => y >= rows.saturating_sub(h),
        }
    }
}

/// One tap-counting hidden control.
#[derive(Debug)]
pub struct TapZone {
    pub event: GestureEvent,
    layout: ZoneLayout,
    required: u8,
    window: Duration,
    /// Only armed while the phone is unlocked (the re-lock control).
    unlocked_only: bool,
    count: u8,
    last_tap: Option<Instant>,
}

impl TapZone {
    pub fn new(
        event: GestureEvent,
        layout: ZoneLayout,
        required: u8,
        window: Duration,
        unlocked_only: bool,
    ) -> Self {
        Self {
            event,
            layout,
            required,
            window,
            unlocked_only,
            count: 0,
            last_tap: None,
        }
    }

    /// Feed one tap. Returns true when this tap just reached the required
    /// count; the counter resets so the action fires exactly once.
    pub fn on_tap(
        &mut self,
        x: u16,
        y: u16,
        cols: u16,
        rows: u16,
        now: Instant,
        unlocked: bool,
    ) -> bool {
        if self.unlocked_only && !unlocked {
            return false;
        }
        if !self.layout.contains(x, y, cols, rows) {
            return false;
        }
        if let Some(last) = self.last_tap {
            if now.duration_since(last) > self.window {
                self.count = 0;
            }
        }
        self.count += 1;
        self.last_tap = Some(now);
        if self.count >= self.required {
            self.count = 0;
            self.last_tap = None;
            true
        } else {
            false
        }
    }
}

/// Vertical swipe: start row is recorded when the drag begins, and the
/// action fires on release once the travel clears the threshold.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_y: Option<u16>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: u16) {
        self.start_y = Some(y);
    }

    pub fn finish(&mut self, end_y: u16) -> bool {
        let Some(start) = self.start_y.take() else {
            return false;
        };
        end_y.abs_diff(start) > SWIPE_MIN_ROWS
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}

/// The full registry of hidden controls.
#[derive(Debug)]
pub struct GestureMap {
    zones: Vec<TapZone>,
    pub swipe: SwipeTracker,
}

impl GestureMap {
    /// The standard layout every variant of the trick shipped with.
    pub fn standard() -> Self {
        let zones = vec![
            TapZone::new(
                GestureEvent::PickLockBackground,
                ZoneLayout::TopLeft { w: 12, h: 4 },
                2,
                TAP_WINDOW,
                false,
            ),
            TapZone::new(
                GestureEvent::PickHomeBackground,
                ZoneLayout::TopRight { w: 12, h: 4 },
                2,
                TAP_WINDOW,
                false,
            ),
            TapZone::new(
                GestureEvent::OpenSettings,
                ZoneLayout::TopCenter { w: 24, h: 4 },
                3,
                TAP_WINDOW,
                false,
            ),
            TapZone::new(
                GestureEvent::Relock,
                ZoneLayout::BottomBand { h: 5 },
                3,
                Duration::from_millis(400),
                true,
            ),
        ];
        Self {
            zones,
            swipe: SwipeTracker::default(),
        }
    }

    /// Dispatch one tap to every zone. More than one event may come back
    /// when zones overlap; that is the documented contract, not a conflict
    /// to resolve.
    pub fn on_tap(
        &mut self,
        x: u16,
        y: u16,
        cols: u16,
        rows: u16,
        now: Instant,
        unlocked: bool,
    ) -> Vec<GestureEvent> {
        self.zones
            .iter_mut()
            .filter_map(|zone| {
                zone.on_tap(x, y, cols, rows, now, unlocked)
                    .then_some(zone.event)
            })
            .collect()
    }

    /// Finish a drag; a qualifying vertical travel yields the reference
    /// prompt action.
    pub fn on_swipe_end(&mut self, end_y: u16) -> Option<GestureEvent> {
        self.swipe.finish(end_y).then_some(GestureEvent::SetReference)
    }
}
