use super::vector_sink::*;

use std::sync::{Arc, Mutex};

///
/// A primitive that was sent to a vector sink
///
#[derive(Clone, Debug, PartialEq)]
pub enum VectorPrimitive {
    Line { start: (f64, f64), end: (f64, f64), rgb: u32, width: u32, dash: u32, space: u32 },
    Rect { min: (f64, f64), max: (f64, f64), rgb: u32 },
    Circle { centre: (f64, f64), radius: f64, rgb: u32 },
    Text { position: (f64, f64), text: String, rgb: u32 },
}

impl VectorPrimitive {
    ///
    /// Sends this primitive to another sink
    ///
    pub fn send_to(&self, sink: &mut (impl ?Sized + VectorSink)) {
        match self {
            VectorPrimitive::Line { start, end, rgb, width, dash, space }   => sink.line(*start, *end, *rgb, *width, *dash, *space),
            VectorPrimitive::Rect { min, max, rgb }                         => sink.rect(*min, *max, *rgb),
            VectorPrimitive::Circle { centre, radius, rgb }                 => sink.circle(*centre, *radius, *rgb),
            VectorPrimitive::Text { position, text, rgb }                   => sink.text(*position, text, *rgb),
        }
    }
}

///
/// A vector sink that stores the primitives it receives
///
/// Clones of a recorder share the same list, so one copy can be given to a drawing context while another is used to
/// read back what was drawn.
///
#[derive(Clone, Default)]
pub struct VectorRecorder {
    primitives: Arc<Mutex<Vec<VectorPrimitive>>>,
}

impl VectorRecorder {
    ///
    /// Creates a new, empty, recorder
    ///
    pub fn new() -> VectorRecorder {
        VectorRecorder::default()
    }

    ///
    /// Returns a copy of the primitives recorded so far
    ///
    pub fn primitives(&self) -> Vec<VectorPrimitive> {
        match self.primitives.lock() {
            Ok(primitives)  => primitives.clone(),
            Err(poisoned)   => poisoned.into_inner().clone(),
        }
    }

    ///
    /// Removes the primitives recorded so far, returning them
    ///
    pub fn take(&self) -> Vec<VectorPrimitive> {
        match self.primitives.lock() {
            Ok(mut primitives)  => primitives.drain(..).collect(),
            Err(poisoned)       => poisoned.into_inner().drain(..).collect(),
        }
    }

    fn push(&self, primitive: VectorPrimitive) {
        match self.primitives.lock() {
            Ok(mut primitives)  => primitives.push(primitive),
            Err(poisoned)       => poisoned.into_inner().push(primitive),
        }
    }
}

impl VectorSink for VectorRecorder {
    fn line(&mut self, start: (f64, f64), end: (f64, f64), rgb: u32, width: u32, dash: u32, space: u32) {
        self.push(VectorPrimitive::Line { start, end, rgb, width, dash, space });
    }

    fn rect(&mut self, min: (f64, f64), max: (f64, f64), rgb: u32) {
        self.push(VectorPrimitive::Rect { min, max, rgb });
    }

    fn circle(&mut self, centre: (f64, f64), radius: f64, rgb: u32) {
        self.push(VectorPrimitive::Circle { centre, radius, rgb });
    }

    fn text(&mut self, position: (f64, f64), text: &str, rgb: u32) {
        self.push(VectorPrimitive::Text { position, text: text.to_string(), rgb });
    }
}
