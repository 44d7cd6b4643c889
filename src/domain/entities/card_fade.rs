use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub opacity: f32,
    /// Downward offset in points.
    pub offset: f32,
}

impl CardVisual {
    pub fn hidden(offset: f32) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }

    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
        }
    }
}

/// Animation plan for one recipe card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFade {
    pub index: usize,
    pub delay: Duration,
    pub duration: Duration,
    pub from: CardVisual,
    pub to: CardVisual,
}

impl CardFade {
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.end()
    }

    /// Visual state `elapsed` after page load.
    pub fn visual_at(&self, elapsed: Duration) -> CardVisual {
        if elapsed <= self.delay {
            return self.from;
        }
        if self.is_finished(elapsed) || self.duration.is_zero() {
            return self.to;
        }

        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease(t);
        CardVisual {
            opacity: lerp(self.from.opacity, self.to.opacity, eased),
            offset: lerp(self.from.offset, self.to.offset, eased),
        }
    }
}

// CSS `ease`, i.e. cubic-bezier(0.25, 0.1, 0.25, 1.0).
fn ease(t: f32) -> f32 {
    const X1: f32 = 0.25;
    const Y1: f32 = 0.1;
    const X2: f32 = 0.25;
    const Y2: f32 = 1.0;

    let t = t.clamp(0.0, 1.0);
    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // Solve x(s) = t by bisection, then evaluate y(s).
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if bezier(X1, X2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(Y1, Y2, (lo + hi) / 2.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> CardFade {
        CardFade {
            index: 2,
            delay: Duration::from_millis(240),
            duration: Duration::from_millis(400),
            from: CardVisual::hidden(10.0),
            to: CardVisual::settled(),
        }
    }

    #[test]
    fn hidden_before_delay() {
        assert_eq!(fade().visual_at(Duration::ZERO), CardVisual::hidden(10.0));
        assert_eq!(
            fade().visual_at(Duration::from_millis(240)),
            CardVisual::hidden(10.0)
        );
    }

    #[test]
    fn settled_after_transition() {
        let fade = fade();
        assert!(fade.is_finished(Duration::from_millis(640)));
        assert_eq!(fade.visual_at(Duration::from_millis(700)), CardVisual::settled());
    }

    #[test]
    fn midway_is_between_states() {
        let visual = fade().visual_at(Duration::from_millis(440));
        assert!(visual.opacity > 0.0 && visual.opacity < 1.0);
        assert!(visual.offset > 0.0 && visual.offset < 10.0);
    }

    #[test]
    fn ease_is_monotonic_with_fixed_ends() {
        assert!(ease(0.0).abs() < 1e-3);
        assert!((ease(1.0) - 1.0).abs() < 1e-3);
        let mut previous = 0.0;
        for step in 1..=10 {
            let value = ease(step as f32 / 10.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
