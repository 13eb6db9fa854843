/// Mock HostApi for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::host::{HostApi, RefGlobals};

#[derive(Debug, Default)]
pub struct MockHost {
    pub globals: RefGlobals,
    pub cvars: FxHashMap<String, f32>,
    /// Every forwarded parameter query (parm, arg)
    pub forwarded: RefCell<Vec<(i32, i32)>>,
    /// Shared so tests can keep a handle after the host is boxed
    pub errors: Rc<RefCell<Vec<String>>>,
}

impl MockHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            globals: RefGlobals { width, height },
            ..Default::default()
        }
    }

    pub fn with_cvar(mut self, name: &str, value: f32) -> Self {
        self.cvars.insert(name.to_string(), value);
        self
    }
}

impl HostApi for MockHost {
    fn globals(&self) -> RefGlobals {
        self.globals
    }

    fn cvar_float(&self, name: &str) -> f32 {
        self.cvars.get(name).copied().unwrap_or(0.0)
    }

    /// Answers `parm * 1000 + arg` so tests can tell forwarded values apart
    fn engine_get_parm(&self, parm: i32, arg: i32) -> i32 {
        self.forwarded.borrow_mut().push((parm, arg));
        parm * 1000 + arg
    }

    fn host_error(&mut self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
