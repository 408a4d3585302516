//! Terminal banner: crossterm-backed reference surface with fade phases.

use super::BannerSurface;
use crate::fit::{fit_text, FitOptions, Fitted};
use crate::layout::Rect;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Where a banner is in its show/hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    /// Fully transparent.
    Hidden,
    /// Opacity ramping up since the given instant.
    FadingIn(Instant),
    /// Fully opaque.
    Visible,
    /// Opacity ramping down since the given instant.
    FadingOut(Instant),
}

/// Foreground color of a banner, before alpha scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A banner display region rendered with crossterm.
///
/// The banner owns its region [`Rect`] and a one-cell-inset text sub-region.
/// Fades are evaluated lazily from elapsed wall time — [`BannerSurface::fade_in`]
/// and [`BannerSurface::fade_out`] only record when the transition began, so
/// they return immediately as the rotation loop requires. Text fits are
/// cached per (text, options) and recomputed when
/// [`FitOptions::re_process`] is set.
#[derive(Debug)]
pub struct TerminalBanner {
    rect: Rect,
    text_rect: Rect,
    text: String,
    fitted: Option<Fitted>,
    phase: FadePhase,
    fade_duration: Duration,
    color: BannerColor,
}

/// Default fade transition length.
const DEFAULT_FADE: Duration = Duration::from_millis(400);

impl TerminalBanner {
    /// Create a hidden banner occupying `rect`.
    ///
    /// The text sub-region is inset one cell on every side.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            text_rect: rect.inset(1),
            text: String::new(),
            fitted: None,
            phase: FadePhase::Hidden,
            fade_duration: DEFAULT_FADE,
            color: BannerColor {
                r: 230,
                g: 230,
                b: 230,
            },
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn with_color(mut self, color: BannerColor) -> Self {
        self.color = color;
        self
    }

    /// Set the fade transition length.
    #[must_use]
    pub const fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// The banner's full region.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// The nested text sub-region.
    pub const fn text_rect(&self) -> Rect {
        self.text_rect
    }

    /// The cached fit, if one has been computed for the current text.
    pub const fn fitted(&self) -> Option<&Fitted> {
        self.fitted.as_ref()
    }

    /// Opacity in `0.0..=1.0` at the given instant.
    pub fn alpha_at(&self, now: Instant) -> f32 {
        match self.phase {
            FadePhase::Hidden => 0.0,
            FadePhase::Visible => 1.0,
            FadePhase::FadingIn(since) => self.fade_ratio(since, now),
            FadePhase::FadingOut(since) => 1.0 - self.fade_ratio(since, now),
        }
    }

    /// Whether any part of the banner is visible at the given instant.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.alpha_at(now) > 0.0
    }

    fn fade_ratio(&self, since: Instant, now: Instant) -> f32 {
        if self.fade_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(since);
        (elapsed.as_secs_f32() / self.fade_duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Queue ANSI output for this banner's region.
    ///
    /// Clears the region, then prints the fitted lines with the foreground
    /// scaled by the current opacity. The caller flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if queueing to the writer fails.
    pub fn draw<W: Write>(&self, out: &mut W, now: Instant) -> io::Result<()> {
        let blank = " ".repeat(usize::from(self.rect.width));
        for row in self.rect.y..self.rect.bottom() {
            queue!(out, MoveTo(self.rect.x, row), Print(&blank))?;
        }

        let alpha = self.alpha_at(now);
        if alpha <= 0.0 {
            return Ok(());
        }
        let Some(fitted) = self.fitted.as_ref() else {
            return Ok(());
        };

        queue!(out, SetForegroundColor(scale(self.color, alpha)))?;
        for line in &fitted.lines {
            queue!(out, MoveTo(line.x, line.y), Print(&line.text))?;
        }
        queue!(out, ResetColor)
    }
}

/// Scale a color toward black by `alpha`.
fn scale(color: BannerColor, alpha: f32) -> Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = |value: u8| (f32::from(value) * alpha).round().clamp(0.0, 255.0) as u8;
    Color::Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

impl BannerSurface for TerminalBanner {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.fitted = None;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn fade_in(&mut self) {
        // Already fully shown: nothing to transition.
        if self.phase != FadePhase::Visible {
            self.phase = FadePhase::FadingIn(Instant::now());
        }
    }

    fn fade_out(&mut self) {
        if self.phase != FadePhase::Hidden {
            self.phase = FadePhase::FadingOut(Instant::now());
        }
    }

    fn refit(&mut self, options: &FitOptions) {
        if options.re_process || self.fitted.is_none() {
            self.fitted = Some(fit_text(&self.text, self.text_rect, options));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> TerminalBanner {
        TerminalBanner::new(Rect::new(0, 0, 20, 5))
            .with_fade_duration(Duration::from_millis(400))
    }

    #[test]
    fn test_starts_hidden() {
        let banner = banner();
        assert!(!banner.is_visible_at(Instant::now()));
    }

    #[test]
    fn test_fade_in_ramps_to_opaque() {
        let mut banner = banner();
        let start = Instant::now();
        banner.fade_in();

        let mid = banner.alpha_at(start + Duration::from_millis(200));
        assert!((mid - 0.5).abs() < 0.05, "mid-fade alpha was {mid}");
        assert!((banner.alpha_at(start + Duration::from_secs(2)) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fade_out_ramps_to_transparent() {
        let mut banner = banner();
        let start = Instant::now();
        banner.fade_in();
        banner.fade_out();

        let mid = banner.alpha_at(start + Duration::from_millis(200));
        assert!((mid - 0.5).abs() < 0.05, "mid-fade alpha was {mid}");
        assert!(banner.alpha_at(start + Duration::from_secs(2)) <= f32::EPSILON);
    }

    #[test]
    fn test_fade_out_while_hidden_stays_hidden() {
        let mut banner = banner();
        banner.fade_out();
        assert!(!banner.is_visible_at(Instant::now() + Duration::from_millis(100)));
    }

    #[test]
    fn test_set_text_invalidates_fit() {
        let mut banner = banner();
        banner.set_text("hello");
        banner.refit(&FitOptions::default());
        assert!(banner.fitted().is_some());

        banner.set_text("changed");
        assert!(banner.fitted().is_none());
    }

    #[test]
    fn test_refit_without_reprocess_keeps_cache() {
        let mut banner = banner();
        banner.set_text("hello there");
        let options = FitOptions {
            re_process: false,
            ..FitOptions::default()
        };
        banner.refit(&options);
        let first = banner.fitted().cloned();

        // A second pass without re_process must not re-measure.
        banner.refit(&options);
        assert_eq!(banner.fitted().cloned(), first);

        let forced = FitOptions {
            max_font_size: 8,
            ..FitOptions::default()
        };
        banner.refit(&forced);
        assert_ne!(banner.fitted().unwrap().font_size, first.unwrap().font_size);
    }

    #[test]
    fn test_fit_uses_inset_text_region() {
        let mut banner = TerminalBanner::new(Rect::new(0, 0, 22, 7));
        assert_eq!(banner.text_rect(), Rect::new(1, 1, 20, 5));

        banner.set_text("hi");
        banner.refit(&FitOptions::default());
        let fitted = banner.fitted().unwrap();
        // Centered within the inset region, not the outer rect.
        assert_eq!(fitted.lines[0].x, 1 + (20 - 2) / 2);
        assert_eq!(fitted.lines[0].y, 1 + (5 - 1) / 2);
    }

    #[test]
    fn test_draw_emits_text_when_visible() {
        let mut banner = banner();
        banner.set_text("ping");
        banner.refit(&FitOptions::default());
        banner.fade_in();

        let mut out = Vec::new();
        banner
            .draw(&mut out, Instant::now() + Duration::from_secs(1))
            .unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("ping"));
    }

    #[test]
    fn test_draw_omits_text_when_hidden() {
        let mut banner = banner();
        banner.set_text("ping");
        banner.refit(&FitOptions::default());

        let mut out = Vec::new();
        banner.draw(&mut out, Instant::now()).unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(!rendered.contains("ping"));
    }
}
