use std::f64::consts::PI;
use std::time::Duration;

/// Radius chosen so that the circumference is (almost exactly) 100 units.
pub const ARC_RADIUS: f64 = 15.9155;
pub const CIRCUMFERENCE: f64 = 2.0 * PI * ARC_RADIUS;
pub const ANIMATION_DURATION: Duration = Duration::from_secs(1);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 100.0)
    }
}

/// Dash offset that leaves `confidence` percent of the ring drawn.
pub fn dash_offset(confidence: f64) -> f64 {
    let confidence = clamp_confidence(confidence);
    if confidence <= 0.0 {
        CIRCUMFERENCE
    } else if confidence >= 100.0 {
        0.0
    } else {
        CIRCUMFERENCE * (1.0 - confidence / 100.0)
    }
}

pub fn format_percent(confidence: f64) -> String {
    format!("{}%", confidence)
}

/// A monotonic time source for the render loop.
pub trait Clock {
    /// Time since some fixed origin. Must never go backwards.
    fn now(&mut self) -> Duration;
}

/// Virtual clock that moves one frame forward each time it is read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    current: Duration,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> SteppingClock {
        SteppingClock {
            current: Duration::ZERO,
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&mut self) -> Duration {
        let now = self.current;
        self.current += self.step;
        now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcFrame {
    pub at: Duration,
    pub progress: f64,
    pub offset: f64,
    pub label: String,
}

impl ArcFrame {
    pub fn is_final(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Linear sweep of the ring from empty to the confidence value.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcAnimation {
    pub confidence: f64,
    pub duration: Duration,
}

impl ArcAnimation {
    pub fn new(confidence: f64) -> ArcAnimation {
        ArcAnimation {
            confidence: clamp_confidence(confidence),
            duration: ANIMATION_DURATION,
        }
    }

    pub fn frame_at(&self, elapsed: Duration) -> ArcFrame {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        if progress >= 1.0 {
            // The last frame is exact, not interpolated.
            return ArcFrame {
                at: elapsed,
                progress: 1.0,
                offset: dash_offset(self.confidence),
                label: format_percent(self.confidence),
            };
        }
        let target = dash_offset(self.confidence);
        ArcFrame {
            at: elapsed,
            progress,
            offset: CIRCUMFERENCE + (target - CIRCUMFERENCE) * progress,
            label: format!("{}%", (progress * self.confidence).round() as i64),
        }
    }

    /// Drives the animation from `clock`, handing every frame to `sink`.
    /// The first frame is at zero elapsed time and the loop ends after the
    /// final frame.
    pub fn render<C, F>(&self, clock: &mut C, mut sink: F)
    where
        C: Clock,
        F: FnMut(ArcFrame),
    {
        let start = clock.now();
        let mut now = start;
        loop {
            let frame = self.frame_at(now.saturating_sub(start));
            let last = frame.is_final();
            log::trace!("Arc frame {:?}", frame);
            sink(frame);
            if last {
                break;
            }
            now = clock.now();
        }
    }

    /// Frames sampled at a fixed frame rate.
    pub fn keyframes(&self) -> ArcKeyframes {
        let mut frames = Vec::new();
        self.render(&mut SteppingClock::new(FRAME_INTERVAL), |frame| {
            frames.push(frame)
        });
        ArcKeyframes {
            duration: self.duration,
            frames,
        }
    }
}

/// A label shown on the ring from `begin` until `end` (or forever).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpan {
    pub label: String,
    pub begin: f64,
    pub end: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcKeyframes {
    pub duration: Duration,
    pub frames: Vec<ArcFrame>,
}

impl ArcKeyframes {
    pub fn circumference(&self) -> f64 {
        CIRCUMFERENCE
    }

    pub fn final_offset(&self) -> f64 {
        self.frames.last().map(|f| f.offset).unwrap_or(CIRCUMFERENCE)
    }

    pub fn final_label(&self) -> String {
        self.frames
            .last()
            .map(|f| f.label.clone())
            .unwrap_or_default()
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// `values` attribute of the dash offset animation. Written at full
    /// precision since the frozen last value is what stays on screen.
    pub fn offset_values(&self) -> String {
        self.frames
            .iter()
            .map(|f| f.offset.to_string())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `keyTimes` attribute matching `offset_values`.
    pub fn key_times(&self) -> String {
        let duration = self.duration.as_secs_f64();
        self.frames
            .iter()
            .map(|f| {
                if duration > 0.0 {
                    format!("{:.3}", (f.at.as_secs_f64() / duration).min(1.0))
                } else {
                    "1".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Consecutive frames with the same label merged into one span.
    pub fn label_spans(&self) -> Vec<LabelSpan> {
        let mut spans: Vec<LabelSpan> = Vec::new();
        for frame in &self.frames {
            let at = frame.at.as_secs_f64();
            match spans.last_mut() {
                Some(span) if span.label == frame.label => {}
                Some(span) => {
                    span.end = Some(at);
                    spans.push(LabelSpan {
                        label: frame.label.clone(),
                        begin: at,
                        end: None,
                    });
                }
                None => spans.push(LabelSpan {
                    label: frame.label.clone(),
                    begin: at,
                    end: None,
                }),
            }
        }
        spans
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct ManualClock {
        times: Vec<Duration>,
    }

    impl Clock for ManualClock {
        fn now(&mut self) -> Duration {
            self.times.remove(0)
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_dash_offset_endpoints_are_exact() {
        assert_eq!(dash_offset(0.0), CIRCUMFERENCE);
        assert_eq!(dash_offset(100.0), 0.0);
        assert_eq!(dash_offset(-5.0), CIRCUMFERENCE);
        assert_eq!(dash_offset(150.0), 0.0);
        assert_eq!(dash_offset(f64::NAN), CIRCUMFERENCE);
    }

    #[test]
    fn test_dash_offset() {
        assert!((dash_offset(87.0) - CIRCUMFERENCE * (1.0 - 0.87)).abs() < 1e-9);
        assert!((dash_offset(50.0) - CIRCUMFERENCE / 2.0).abs() < 1e-9);
        assert!((CIRCUMFERENCE - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_at() {
        let animation = ArcAnimation::new(80.0);

        let first = animation.frame_at(Duration::ZERO);
        assert_eq!(first.offset, CIRCUMFERENCE);
        assert_eq!(first.label, "0%");

        let half = animation.frame_at(ms(500));
        assert!((half.offset - CIRCUMFERENCE * 0.6).abs() < 1e-9);
        assert_eq!(half.label, "40%");

        let last = animation.frame_at(ms(1500));
        assert!(last.is_final());
        assert_eq!(last.offset, dash_offset(80.0));
        assert_eq!(last.label, "80%");
    }

    #[test]
    fn test_final_label_keeps_decimals() {
        let animation = ArcAnimation::new(91.27);
        assert_eq!(animation.frame_at(ms(999)).label, "91%");
        assert_eq!(animation.frame_at(ms(1000)).label, "91.27%");
    }

    #[test]
    fn test_render_uses_clock_deltas() {
        let animation = ArcAnimation::new(100.0);
        let mut clock = ManualClock {
            times: vec![ms(5000), ms(5250), ms(5250), ms(5900), ms(6100), ms(7000)],
        };
        let mut frames = Vec::new();
        animation.render(&mut clock, |frame| frames.push(frame));

        let labels: Vec<&str> = frames.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "25%", "25%", "90%", "100%"]);
        assert_eq!(frames.last().unwrap().offset, 0.0);
        // The loop stops at the final frame without reading the clock again.
        assert_eq!(clock.times, vec![ms(7000)]);
    }

    #[test]
    fn test_keyframes() {
        let keyframes = ArcAnimation::new(87.0).keyframes();
        assert_eq!(keyframes.frames.len(), 21);
        assert_eq!(keyframes.frames[0].offset, CIRCUMFERENCE);
        assert_eq!(keyframes.final_offset(), dash_offset(87.0));
        assert_eq!(keyframes.final_label(), "87%");
        assert!(keyframes.key_times().starts_with("0.000;0.050;"));
        assert!(keyframes.key_times().ends_with(";1.000"));
        assert_eq!(
            keyframes.offset_values().split(';').count(),
            keyframes.frames.len()
        );
    }

    #[test]
    fn test_last_offset_value_is_exact() {
        for confidence in [0.0, 87.0, 100.0] {
            let values = ArcAnimation::new(confidence).keyframes().offset_values();
            let last: f64 = values.rsplit(';').next().unwrap().parse().unwrap();
            assert_eq!(last, dash_offset(confidence), "{}", confidence);
        }
        let values = ArcAnimation::new(0.0).keyframes().offset_values();
        assert_eq!(values.rsplit(';').next().unwrap(), CIRCUMFERENCE.to_string());
    }

    #[test]
    fn test_zero_confidence_has_single_label() {
        let keyframes = ArcAnimation::new(0.0).keyframes();
        assert_eq!(
            keyframes.label_spans(),
            vec![LabelSpan {
                label: "0%".to_string(),
                begin: 0.0,
                end: None,
            }]
        );
        assert_eq!(keyframes.final_offset(), CIRCUMFERENCE);
    }

    #[test]
    fn test_label_spans_are_contiguous() {
        let spans = ArcAnimation::new(60.0).keyframes().label_spans();
        assert_eq!(spans.first().unwrap().label, "0%");
        assert_eq!(spans.last().unwrap().label, "60%");
        assert_eq!(spans.last().unwrap().end, None);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, Some(pair[1].begin));
        }
    }
}
