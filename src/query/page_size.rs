//! Page size resolution: a fixed list of allowed sizes plus a per-view
//! remembered choice.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::config::Settings;

/// Where a user's last page-size choice per view is kept (a cookie, a
/// profile row, ...).
pub trait PageSizePreferences: Send + Sync {
    fn get(&self, view: &str) -> Option<usize>;
    fn set(&self, view: &str, size: usize);
}

/// In-memory preference store. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryPreferences {
    sizes: Arc<RwLock<HashMap<String, usize>>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSizePreferences for InMemoryPreferences {
    fn get(&self, view: &str) -> Option<usize> {
        self.sizes.read().ok()?.get(view).copied()
    }

    fn set(&self, view: &str, size: usize) {
        if let Ok(mut sizes) = self.sizes.write() {
            sizes.insert(view.to_string(), size);
        }
    }
}

/// One entry of the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSizeOption {
    pub size: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizePolicy {
    sizes: Vec<usize>,
    default: usize,
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PageSizePolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sizes: settings.page_sizes.clone(),
            default: settings.default_page_size.max(1),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// An allowed requested size wins and is remembered for the view;
    /// otherwise the remembered size; otherwise the default.
    pub fn resolve(
        &self,
        view: &str,
        requested: Option<i64>,
        prefs: &dyn PageSizePreferences,
    ) -> usize {
        let requested = requested
            .and_then(|size| usize::try_from(size).ok())
            .filter(|size| self.sizes.contains(size));

        if let Some(size) = requested {
            prefs.set(view, size);
            return size;
        }

        prefs
            .get(view)
            .filter(|size| self.sizes.contains(size))
            .unwrap_or(self.default)
    }

    pub fn options(&self, selected: usize) -> Vec<PageSizeOption> {
        self.sizes
            .iter()
            .map(|&size| PageSizeOption {
                size,
                selected: size == selected,
            })
            .collect()
    }
}
