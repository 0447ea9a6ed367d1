/// One interleaved PCM frame as delivered by a capture source
#[derive(Debug, Clone)]
pub struct AudioFrame {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioFrame {
    pub fn mono(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    /// Average interleaved channels down to a single one.
    /// Mono frames come back unchanged; a trailing partial group is dropped.
    pub fn downmix_to_mono(&self) -> Vec<i16> {
        if self.channels <= 1 {
            return self.samples.clone();
        }

        let channels = self.channels as usize;
        self.samples
            .chunks_exact(channels)
            .map(|group| {
                let sum: i32 = group.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }
}

/// Accumulated mono audio for one capture session
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioClip {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    pub fn push_mono(&mut self, samples: &[i16]) {
        self.samples.extend_from_slice(samples);
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stereo_downmix_averages_pairs() {
        let frame = AudioFrame {
            samples: vec![100, 200, -50, 50, 7, 9],
            sample_rate: 16_000,
            channels: 2,
        };
        assert_eq!(frame.downmix_to_mono(), vec![150, 0, 8]);
    }

    #[test]
    fn mono_passes_through_unchanged() {
        let frame = AudioFrame::mono(vec![1, 2, 3], 16_000);
        assert_eq!(frame.downmix_to_mono(), vec![1, 2, 3]);
    }

    #[test]
    fn trailing_partial_group_is_dropped() {
        let frame = AudioFrame {
            samples: vec![10, 20, 30],
            sample_rate: 16_000,
            channels: 2,
        };
        assert_eq!(frame.downmix_to_mono(), vec![15]);
    }

    #[test]
    fn clip_accumulates_pushed_samples() {
        let mut clip = AudioClip::new(16_000);
        assert!(clip.is_empty());
        clip.push_mono(&[1, 2]);
        clip.push_mono(&[3]);
        assert_eq!(clip.samples(), &[1, 2, 3]);
        assert_eq!(clip.len(), 3);
    }
}
