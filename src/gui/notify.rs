use std::time::{Duration, Instant};

use crate::doc::PoemFont;

use super::renderer::types::{FlatRectCmd, Rect, RoundedRectCmd, TextCmd, scaled_px};

/// How long a toast stays fully visible between its transitions.
pub(in crate::gui) const TOAST_VISIBLE: Duration = Duration::from_secs(5);

/// Slide-in / slide-out transition length.
pub(in crate::gui) const TOAST_TRANSITION: Duration = Duration::from_millis(300);

const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn accent(self) -> u32 {
        match self {
            Severity::Info => 0x3B82F6,
            Severity::Success => 0x10B981,
            Severity::Warning => 0xF59E0B,
            Severity::Error => 0xEF4444,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Entering,
    Visible,
    Exiting,
}

/// One transient toast. Each runs its own lifecycle independent of its
/// neighbors in the stack.
pub(in crate::gui) struct Toast {
    pub message: String,
    pub severity: Severity,
    phase: Phase,
    /// When the current phase began.
    phase_start: Instant,
}

impl Toast {
    fn phase_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.phase_start)
    }

    /// Horizontal slide progress in [0, 1]: 0 fully off-screen, 1 resting.
    fn slide(&self, now: Instant) -> f32 {
        let t = self.phase_elapsed(now).as_secs_f32() / TOAST_TRANSITION.as_secs_f32();
        match self.phase {
            Phase::Entering => t.clamp(0.0, 1.0),
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - t.clamp(0.0, 1.0),
        }
    }
}

/// Draw commands for one toast.
pub(in crate::gui) struct ToastLayout {
    pub bg: RoundedRectCmd,
    pub accent: FlatRectCmd,
    pub text: TextCmd,
    /// Click target, also used for dismissal hit-testing.
    pub rect: Rect,
}

/// Top-right toast stack. Pushing never displaces existing toasts; each
/// dismisses on its own schedule or on click.
#[derive(Default)]
pub(in crate::gui) struct NotificationCenter {
    toasts: Vec<Toast>,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            severity,
            phase: Phase::Entering,
            phase_start: now,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Starts the exit transition for a clicked toast. A toast already on its
    /// way out ignores further clicks, so removal happens exactly once.
    pub fn dismiss(&mut self, index: usize, now: Instant) {
        if let Some(toast) = self.toasts.get_mut(index)
            && toast.phase != Phase::Exiting
        {
            toast.phase = Phase::Exiting;
            toast.phase_start = now;
        }
    }

    /// Advances phases and drops finished toasts. Returns true when anything
    /// changed (a redraw is needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for toast in &mut self.toasts {
            match toast.phase {
                Phase::Entering if toast.phase_elapsed(now) >= TOAST_TRANSITION => {
                    toast.phase = Phase::Visible;
                    toast.phase_start += TOAST_TRANSITION;
                    changed = true;
                }
                Phase::Visible if toast.phase_elapsed(now) >= TOAST_VISIBLE => {
                    toast.phase = Phase::Exiting;
                    toast.phase_start += TOAST_VISIBLE;
                    changed = true;
                }
                _ => {}
            }
        }
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| !(toast.phase == Phase::Exiting && toast.phase_elapsed(now) >= TOAST_TRANSITION));
        changed || self.toasts.len() != before
    }

    /// Next wakeup: animation frames while any toast slides, otherwise the
    /// earliest visibility deadline.
    pub fn schedule(&self, now: Instant) -> Option<Instant> {
        let mut next: Option<Instant> = None;
        for toast in &self.toasts {
            let deadline = match toast.phase {
                Phase::Entering | Phase::Exiting => now + ANIMATION_FRAME_INTERVAL,
                Phase::Visible => toast.phase_start + TOAST_VISIBLE,
            };
            next = Some(next.map_or(deadline, |current| current.min(deadline)));
        }
        next
    }

    /// Lays out the stack against the buffer's right edge, newest at the
    /// bottom. Sliding toasts hang off-screen proportionally.
    pub fn layout(&self, buf_width: u32, ui_scale: f64, now: Instant) -> Vec<ToastLayout> {
        let width = scaled_px(300, ui_scale) as f32;
        let height = scaled_px(48, ui_scale) as f32;
        let margin = scaled_px(20, ui_scale) as f32;
        let gap = scaled_px(10, ui_scale) as f32;
        let accent_w = scaled_px(4, ui_scale) as f32;
        let pad = scaled_px(14, ui_scale) as f32;
        let font_size = scaled_px(14, ui_scale) as f32;
        let radius = scaled_px(8, ui_scale) as f32;

        let mut layouts = Vec::with_capacity(self.toasts.len());
        let mut y = margin;
        for toast in &self.toasts {
            let slide = toast.slide(now);
            let resting_x = buf_width as f32 - margin - width;
            let x = resting_x + (width + margin) * (1.0 - slide);
            let rect = Rect::new(x, y, width, height);
            layouts.push(ToastLayout {
                bg: RoundedRectCmd {
                    x,
                    y,
                    w: width,
                    h: height,
                    radius,
                    color: toast.severity.accent(),
                    opacity: 1.0,
                },
                accent: FlatRectCmd {
                    x,
                    y,
                    w: accent_w,
                    h: height,
                    color: 0xFFFFFF,
                    opacity: 0.35,
                },
                text: TextCmd {
                    x: x + pad,
                    y: y + (height - font_size * 1.2) / 2.0,
                    text: toast.message.clone(),
                    font: PoemFont::Sans,
                    size: font_size,
                    color: 0xFFFFFF,
                    opacity: 1.0,
                },
                rect,
            });
            y += height + gap;
        }
        layouts
    }

    /// Index of the toast under the pointer, if any.
    pub fn hit_test(&self, x: f64, y: f64, buf_width: u32, ui_scale: f64, now: Instant) -> Option<usize> {
        self.layout(buf_width, ui_scale, now)
            .iter()
            .position(|toast| toast.rect.contains(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_notify.rs"]
mod tests;
