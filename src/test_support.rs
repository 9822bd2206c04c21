use crate::resolver::{ParameterResolver, ResolveError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// In-memory resolver that records every lookup.
pub(crate) struct MapResolver {
    parameters: HashMap<String, String>,
    fail_with_transport: bool,
    calls: RefCell<Vec<String>>,
}

impl MapResolver {
    pub(crate) fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parameters: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fail_with_transport: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The parameters used throughout the test suite.
    pub(crate) fn myapp() -> Self {
        Self::new([
            ("/myapp/db_host", "db.example.com"),
            ("/myapp/db_name", "myapp_db"),
            ("/myapp/db_user", "dbuser"),
            ("/myapp/db_password", "secret-password"),
            ("/myapp/api_key", "api-key-12345"),
        ])
    }

    /// Every lookup fails as if the store were unreachable.
    pub(crate) fn failing() -> Self {
        Self {
            fail_with_transport: true,
            ..Self::new(Vec::<(String, String)>::new())
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ParameterResolver for MapResolver {
    fn get_parameter(&self, name: &str) -> Result<String, ResolveError> {
        self.calls.borrow_mut().push(name.to_string());

        if self.fail_with_transport {
            return Err(ResolveError::Transport {
                name: name.to_string(),
                message: "mock SSM error".to_string(),
            });
        }

        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
            })
    }
}
