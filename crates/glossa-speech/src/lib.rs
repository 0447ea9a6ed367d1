pub mod audio;
pub mod recognizer;
pub mod session;
pub mod synthesizer;

pub use audio::{AudioClip, AudioFrame};
pub use recognizer::{HttpRecognizer, RecognizeError, Recognizer};
pub use session::{CaptureError, CaptureSession};
pub use synthesizer::{EspeakSynthesizer, SynthesisError, Synthesizer};
