/// Fixed-function style matrix stack, kept on the CPU and uploaded with
/// each draw.

use glam::Mat4;
use xash_ref::engine_warn;

/// Depth guaranteed by fixed-function GL for the model-view stack
pub const MAX_STACK_DEPTH: usize = 32;

#[derive(Debug, Clone)]
pub struct MatrixStack {
    name: &'static str,
    stack: Vec<Mat4>,
}

impl MatrixStack {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stack: vec![Mat4::IDENTITY],
        }
    }

    pub fn top(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Duplicate the top matrix. Ignored with a warning on overflow.
    pub fn push(&mut self) {
        if self.stack.len() >= MAX_STACK_DEPTH {
            engine_warn!("xref::gl", "{} matrix stack overflow", self.name);
            return;
        }
        let top = self.top();
        self.stack.push(top);
    }

    /// Drop the top matrix. Ignored with a warning on underflow.
    pub fn pop(&mut self) {
        if self.stack.len() <= 1 {
            engine_warn!("xref::gl", "{} matrix stack underflow", self.name);
            return;
        }
        self.stack.pop();
    }

    pub fn load_identity(&mut self) {
        self.replace_top(Mat4::IDENTITY);
    }

    /// Post-multiply the top matrix, like glMultMatrix
    pub fn multiply(&mut self, matrix: Mat4) {
        let top = self.top();
        self.replace_top(top * matrix);
    }

    fn replace_top(&mut self, matrix: Mat4) {
        match self.stack.last_mut() {
            Some(top) => *top = matrix,
            None => self.stack.push(matrix),
        }
    }
}

#[cfg(test)]
#[path = "gl_matrix_stack_tests.rs"]
mod tests;
