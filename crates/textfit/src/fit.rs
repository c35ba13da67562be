//! Font-size search that fits a block of text to a canvas.
//!
//! Naive proportional scaling (`target / measured`) breaks down as soon as
//! text wraps: changing the font size moves the wrap points, which changes
//! the aspect ratio nonlinearly, so a ratio computed once is wrong after the
//! re-wrap. [`fit_wrapped`] instead treats the font size as the single search
//! variable and re-measures after every change, halving its step whenever the
//! search reverses direction so it converges geometrically instead of
//! oscillating between too-big and too-small.
//!
//! [`fit_single_line`] is the O(1) alternative for text that never wraps.

use crate::error::FitError;
use crate::font::FontDescriptor;
use crate::measure::{MeasureRequest, TextMeasurer};
use crate::primitives::{Anchor, Canvas, HorizontalAlign, MeasuredSize, VerticalAlign};

/// Layout mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Wrap at word boundaries and search for the size whose wrapped height
    /// lands in the target band.
    WordWrap,
    /// Single unwrapped line, scaled in one step by the width/height ratio.
    SingleLine,
}

/// How the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// The measured height landed inside the target band.
    Converged { iterations: u32 },
    /// The attempt budget ran out; the result is the last size tried and may
    /// lie outside the band. Soft failure, not an error.
    Exhausted,
}

/// Final font size and layout parameters to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub font: FontDescriptor,
    pub wrap_width: Option<f32>,
    pub anchor: Anchor,
    /// Bounding box of the text at `font`'s size: the last measurement taken
    /// in [`WrapMode::WordWrap`], the scaled estimate in
    /// [`WrapMode::SingleLine`].
    pub measured: MeasuredSize,
    pub outcome: FitOutcome,
}

impl FitResult {
    pub fn converged(&self) -> bool {
        matches!(self.outcome, FitOutcome::Converged { .. })
    }
}

/// Fit `text` to `canvas` in the given mode. See [`fit_wrapped`] and
/// [`fit_single_line`].
pub fn fit<M: TextMeasurer>(
    measurer: &mut M,
    canvas: Canvas,
    padding: f32,
    text: &str,
    font: &FontDescriptor,
    mode: WrapMode,
) -> Result<FitResult, FitError> {
    match mode {
        WrapMode::WordWrap => fit_wrapped(measurer, canvas, padding, text, font),
        WrapMode::SingleLine => fit_single_line(measurer, canvas, padding, text, font),
    }
}

/// Search for the font size whose word-wrapped height falls within the band
/// `[canvas.height - 3*padding, canvas.height - 2*padding]`.
///
/// The step size starts at half the initial font size and is halved on every
/// direction reversal, so the adjustment shrinks monotonically per reversal
/// and the search cannot oscillate indefinitely. The attempt budget
/// (`max(10, floor(size) * 2)`) bounds the iteration count; running out of
/// attempts returns the last size tried with [`FitOutcome::Exhausted`].
///
/// The returned anchor places the block left-aligned at the padding edge and
/// vertically centered on the canvas.
pub fn fit_wrapped<M: TextMeasurer>(
    measurer: &mut M,
    canvas: Canvas,
    padding: f32,
    text: &str,
    font: &FontDescriptor,
) -> Result<FitResult, FitError> {
    validate(canvas, padding, text, font)?;

    let target_width = canvas.width_f() - padding * 2.0;
    let target_height = canvas.height_f() - padding * 2.0;
    // Accept anything within one padding's worth below the target, so the
    // text is not left with a large unused margin.
    let target_min_height = canvas.height_f() - padding * 3.0;

    let mut scaled = font.clone();
    let mut measured = MeasuredSize::new(f32::INFINITY, f32::INFINITY);
    let mut scale_factor = scaled.size / 2.0;
    let budget = (scaled.size.floor() as u32 * 2).max(10);
    let mut attempts = budget;
    // Direction of the previous adjustment; the step is halved when the new
    // adjustment goes the other way.
    let mut grew_last = false;

    while (measured.height > target_height || measured.height < target_min_height) && attempts > 0 {
        // Both branches read the measurement taken at the end of the previous
        // iteration; there is exactly one measurement per loop pass.
        if measured.height > target_height {
            if grew_last {
                scale_factor /= 2.0;
            }
            scaled = scaled.with_size(scaled.size - scale_factor);
            grew_last = false;
        }

        if measured.height < target_min_height {
            if !grew_last {
                scale_factor /= 2.0;
            }
            scaled = scaled.with_size(scaled.size + scale_factor);
            grew_last = true;
        }

        attempts -= 1;

        measured = measurer.measure(MeasureRequest {
            text,
            font: &scaled,
            wrap_width: Some(target_width),
        });

        log::trace!(
            "fit step: size={:.3} step={:.3} measured={:.1}x{:.1} band=[{:.1}, {:.1}] attempts_left={}",
            scaled.size,
            scale_factor,
            measured.width,
            measured.height,
            target_min_height,
            target_height,
            attempts,
        );
    }

    let outcome = if measured.height <= target_height && measured.height >= target_min_height {
        FitOutcome::Converged {
            iterations: budget - attempts,
        }
    } else {
        log::warn!(
            "fit exhausted after {} attempts; keeping size {:.2} (height {:.1} outside [{:.1}, {:.1}])",
            budget,
            scaled.size,
            measured.height,
            target_min_height,
            target_height,
        );
        FitOutcome::Exhausted
    };

    Ok(FitResult {
        font: scaled,
        wrap_width: Some(target_width),
        anchor: Anchor::new(
            [padding, canvas.height_f() / 2.0],
            HorizontalAlign::Left,
            VerticalAlign::Center,
        ),
        measured,
        outcome,
    })
}

/// Scale a single unwrapped line to the canvas in one step.
///
/// Measures once, scales the font size by
/// `min(canvas.width / measured.width, canvas.height / measured.height)` and
/// centers the result. Only valid when reflow due to wrapping is not a
/// concern; multi-line text needs [`fit_wrapped`].
pub fn fit_single_line<M: TextMeasurer>(
    measurer: &mut M,
    canvas: Canvas,
    padding: f32,
    text: &str,
    font: &FontDescriptor,
) -> Result<FitResult, FitError> {
    validate(canvas, padding, text, font)?;

    let unscaled = measurer.measure(MeasureRequest {
        text,
        font,
        wrap_width: None,
    });

    if unscaled.width <= 0.0 || unscaled.height <= 0.0 {
        return Err(FitError::InvalidInput("text measured with zero extent"));
    }

    let scaling_factor = (canvas.width_f() / unscaled.width).min(canvas.height_f() / unscaled.height);
    let scaled = font.with_size(font.size * scaling_factor);
    let measured = MeasuredSize::new(
        unscaled.width * scaling_factor,
        unscaled.height * scaling_factor,
    );

    Ok(FitResult {
        font: scaled,
        wrap_width: None,
        anchor: Anchor::new(
            [canvas.width_f() / 2.0, canvas.height_f() / 2.0],
            HorizontalAlign::Center,
            VerticalAlign::Center,
        ),
        measured,
        outcome: FitOutcome::Converged { iterations: 1 },
    })
}

fn validate(
    canvas: Canvas,
    padding: f32,
    text: &str,
    font: &FontDescriptor,
) -> Result<(), FitError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(FitError::InvalidInput("canvas dimensions must be positive"));
    }
    if text.is_empty() {
        return Err(FitError::InvalidInput("text must not be empty"));
    }
    if !(font.size > 0.0) {
        return Err(FitError::InvalidInput("font size must be positive"));
    }
    if !(padding >= 0.0) {
        return Err(FitError::InvalidInput("padding must be non-negative"));
    }
    // Padding that consumes the whole canvas leaves no band to fit into.
    if padding * 2.0 >= canvas.width_f().min(canvas.height_f()) {
        return Err(FitError::InvalidInput("padding leaves no usable area"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measurer whose wrapped height is a fixed multiple of the font size,
    /// recording every size it was asked to measure.
    struct ProportionalMeasurer {
        height_per_size: f32,
        sizes_seen: Vec<f32>,
    }

    impl ProportionalMeasurer {
        fn new(height_per_size: f32) -> Self {
            Self {
                height_per_size,
                sizes_seen: Vec::new(),
            }
        }
    }

    impl TextMeasurer for ProportionalMeasurer {
        fn measure(&mut self, req: MeasureRequest<'_>) -> MeasuredSize {
            self.sizes_seen.push(req.font.size);
            MeasuredSize::new(
                req.wrap_width.unwrap_or(f32::INFINITY),
                req.font.size * self.height_per_size,
            )
        }
    }

    /// Measurer that always reports the same size regardless of font.
    struct ConstantMeasurer {
        size: MeasuredSize,
        calls: u32,
    }

    impl ConstantMeasurer {
        fn new(width: f32, height: f32) -> Self {
            Self {
                size: MeasuredSize::new(width, height),
                calls: 0,
            }
        }
    }

    impl TextMeasurer for ConstantMeasurer {
        fn measure(&mut self, _req: MeasureRequest<'_>) -> MeasuredSize {
            self.calls += 1;
            self.size
        }
    }

    fn font(size: f32) -> FontDescriptor {
        FontDescriptor::named("Inter", size)
    }

    #[test]
    fn test_wrapped_converges_into_band() {
        // 800x200 canvas with padding 5: band is [185, 190]. Height tracks
        // 8x the font size, so any size in [23.125, 23.75] converges.
        let mut measurer = ProportionalMeasurer::new(8.0);
        let result = fit_wrapped(&mut measurer, Canvas::new(800, 200), 5.0, "Hello", &font(24.0))
            .unwrap();

        assert!(result.converged());
        assert!(result.measured.height >= 185.0 && result.measured.height <= 190.0);
        assert!(result.font.size >= 23.125 && result.font.size <= 23.75);
        assert_eq!(result.wrap_width, Some(790.0));
        assert_eq!(result.anchor.position, [5.0, 100.0]);
        assert_eq!(result.anchor.h_align, HorizontalAlign::Left);
        assert_eq!(result.anchor.v_align, VerticalAlign::Center);

        // Budget for size 24 is 48 attempts; convergence must fit inside it.
        match result.outcome {
            FitOutcome::Converged { iterations } => assert!(iterations <= 48),
            FitOutcome::Exhausted => unreachable!(),
        }
    }

    #[test]
    fn test_exhaustion_returns_last_attempt() {
        // Text that measures taller than the canvas at every size: the search
        // keeps shrinking, burns the whole budget, and still returns a result.
        let mut measurer = ConstantMeasurer::new(500.0, 10_000.0);
        let result = fit_wrapped(&mut measurer, Canvas::new(800, 200), 5.0, "wall of text", &font(24.0))
            .unwrap();

        assert_eq!(result.outcome, FitOutcome::Exhausted);
        // Exactly one measurement per iteration, exactly budget iterations.
        assert_eq!(measurer.calls, 48);
        assert_eq!(result.measured.height, 10_000.0);
    }

    #[test]
    fn test_small_initial_size_uses_minimum_budget() {
        let mut measurer = ConstantMeasurer::new(500.0, 10_000.0);
        let result = fit_wrapped(&mut measurer, Canvas::new(800, 200), 5.0, "text", &font(3.0))
            .unwrap();

        assert_eq!(result.outcome, FitOutcome::Exhausted);
        assert_eq!(measurer.calls, 10);
    }

    #[test]
    fn test_idempotent_for_pure_measurer() {
        let canvas = Canvas::new(800, 200);
        let f = font(24.0);

        let mut m1 = ProportionalMeasurer::new(8.0);
        let mut m2 = ProportionalMeasurer::new(8.0);
        let a = fit_wrapped(&mut m1, canvas, 5.0, "Hello", &f).unwrap();
        let b = fit_wrapped(&mut m2, canvas, 5.0, "Hello", &f).unwrap();

        assert_eq!(a, b);
        assert_eq!(m1.sizes_seen, m2.sizes_seen);
    }

    #[test]
    fn test_step_halves_on_every_direction_reversal() {
        let mut measurer = ProportionalMeasurer::new(8.0);
        fit_wrapped(&mut measurer, Canvas::new(800, 200), 5.0, "Hello", &font(24.0)).unwrap();

        // Reconstruct the applied steps from the sizes the measurer saw (the
        // first step acts on the initial size before any measurement).
        let mut sizes = vec![24.0];
        sizes.extend(&measurer.sizes_seen);
        let steps: Vec<f32> = sizes.windows(2).map(|w| w[1] - w[0]).collect();

        let mut reversals = 0;
        for pair in steps.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if prev.signum() != next.signum() {
                reversals += 1;
                assert_eq!(
                    next.abs(),
                    prev.abs() / 2.0,
                    "step must halve on reversal: {:?}",
                    steps
                );
            } else {
                assert_eq!(next.abs(), prev.abs(), "step must hold between reversals");
            }
        }
        assert!(reversals >= 1, "search never reversed: {:?}", steps);
    }

    #[test]
    fn test_zero_padding_gives_exact_band() {
        // With padding 0 the band degenerates to the single value 200, which
        // only size 25 hits exactly. The input is accepted and the search
        // either lands on 25 or exhausts its budget next to it.
        let mut measurer = ProportionalMeasurer::new(8.0);
        let result = fit_wrapped(&mut measurer, Canvas::new(800, 200), 0.0, "Hello", &font(24.0))
            .unwrap();

        assert!((result.font.size - 25.0).abs() < 0.01);
        assert!(measurer.sizes_seen.len() <= 48);
        if result.converged() {
            assert_eq!(result.measured.height, 200.0);
        }
        assert_eq!(result.wrap_width, Some(800.0));
        assert_eq!(result.anchor.position, [0.0, 100.0]);
    }

    #[test]
    fn test_single_line_scales_by_limiting_dimension() {
        // 400x400 canvas, unwrapped text measures 800x100: width is the
        // limiting dimension, factor min(0.5, 4.0) = 0.5.
        let mut measurer = ConstantMeasurer::new(800.0, 100.0);
        let result = fit_single_line(&mut measurer, Canvas::new(400, 400), 5.0, "wide", &font(24.0))
            .unwrap();

        assert_eq!(result.font.size, 12.0);
        assert_eq!(result.wrap_width, None);
        assert_eq!(result.measured, MeasuredSize::new(400.0, 50.0));
        assert_eq!(result.anchor.position, [200.0, 200.0]);
        assert_eq!(result.anchor.h_align, HorizontalAlign::Center);
        assert_eq!(result.anchor.v_align, VerticalAlign::Center);
        assert_eq!(measurer.calls, 1);
    }

    #[test]
    fn test_fit_dispatches_on_mode() {
        let canvas = Canvas::new(400, 400);
        let f = font(24.0);

        let mut m = ConstantMeasurer::new(800.0, 100.0);
        let single = fit(&mut m, canvas, 5.0, "wide", &f, WrapMode::SingleLine).unwrap();
        assert_eq!(single.wrap_width, None);

        let mut m = ProportionalMeasurer::new(8.0);
        let wrapped = fit(&mut m, canvas, 5.0, "wide", &f, WrapMode::WordWrap).unwrap();
        assert_eq!(wrapped.wrap_width, Some(390.0));
    }

    #[test]
    fn test_invalid_inputs_rejected_before_measuring() {
        let canvas = Canvas::new(800, 200);
        let f = font(24.0);

        let cases: Vec<FitError> = vec![
            fit_wrapped(&mut ConstantMeasurer::new(1.0, 1.0), Canvas::new(0, 200), 5.0, "x", &f)
                .unwrap_err(),
            fit_wrapped(&mut ConstantMeasurer::new(1.0, 1.0), canvas, 5.0, "", &f).unwrap_err(),
            fit_wrapped(&mut ConstantMeasurer::new(1.0, 1.0), canvas, 5.0, "x", &font(0.0))
                .unwrap_err(),
            fit_wrapped(&mut ConstantMeasurer::new(1.0, 1.0), canvas, -1.0, "x", &f).unwrap_err(),
            fit_wrapped(&mut ConstantMeasurer::new(1.0, 1.0), canvas, 100.0, "x", &f).unwrap_err(),
        ];

        for err in cases {
            assert!(matches!(err, FitError::InvalidInput(_)));
        }

        // Rejection happens before any measurement.
        let mut measurer = ConstantMeasurer::new(1.0, 1.0);
        let _ = fit_wrapped(&mut measurer, canvas, 5.0, "", &f);
        assert_eq!(measurer.calls, 0);
    }
}
