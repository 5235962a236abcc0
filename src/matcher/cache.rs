use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use super::CacheMode;
use crate::pattern::SegmentMatcher;

/// Entry count at which an `Auto` cache gives up. Past this point the
/// patterns are most likely not re-occurring and caching only grows memory.
pub const CACHE_TURNOFF_THRESHOLD: usize = 65_536;

pub type PatternTokens = Arc<[Box<str>]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CacheState {
    AutoEnabled = 0,
    AutoDisabled = 1,
    ForcedEnabled = 2,
    ForcedDisabled = 3,
}

impl CacheState {
    fn from_mode(mode: CacheMode) -> Self {
        match mode {
            CacheMode::Auto => Self::AutoEnabled,
            CacheMode::Enabled => Self::ForcedEnabled,
            CacheMode::Disabled => Self::ForcedDisabled,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::AutoEnabled,
            1 => Self::AutoDisabled,
            2 => Self::ForcedEnabled,
            _ => Self::ForcedDisabled,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::AutoEnabled | Self::ForcedEnabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub tokenized_patterns: usize,
    pub compiled_segments: usize,
    pub state: CacheState,
}

#[derive(Debug, Default)]
struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
}

type StringMap<V> = RwLock<FastHashMap<Box<str>, V>>;

/// Tokenized-pattern and compiled-segment caches shared by every caller of
/// one matcher.
#[derive(Debug)]
pub struct CompilationCache {
    state: AtomicU8,
    threshold: usize,
    tokens: StringMap<PatternTokens>,
    segments: StringMap<Arc<SegmentMatcher>>,
    stats: CacheStats,
}

impl CompilationCache {
    pub fn new(mode: CacheMode) -> Self {
        Self::with_threshold(mode, CACHE_TURNOFF_THRESHOLD)
    }

    pub(crate) fn with_threshold(mode: CacheMode, threshold: usize) -> Self {
        Self {
            state: AtomicU8::new(CacheState::from_mode(mode) as u8),
            threshold,
            tokens: RwLock::new(FastHashMap::new()),
            segments: RwLock::new(FastHashMap::new()),
            stats: CacheStats::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> CacheState {
        CacheState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn tokens<F>(&self, pattern: &str, tokenize: F) -> PatternTokens
    where
        F: FnOnce() -> PatternTokens,
    {
        match self.read_through(&self.tokens, pattern, || {
            Ok::<_, std::convert::Infallible>(tokenize())
        }) {
            Ok(tokens) => tokens,
            Err(never) => match never {},
        }
    }

    /// Compile failures are returned as-is and never stored, so the next call
    /// for the same segment compiles again.
    pub fn segment<F, E>(&self, segment: &str, compile: F) -> Result<Arc<SegmentMatcher>, E>
    where
        F: FnOnce() -> Result<SegmentMatcher, E>,
    {
        self.read_through(&self.segments, segment, || compile().map(Arc::new))
    }

    pub fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.stats.hits.load(Ordering::Relaxed),
            misses: self.stats.misses.load(Ordering::Relaxed),
            tokenized_patterns: self.tokens.read().len(),
            compiled_segments: self.segments.read().len(),
            state: self.state(),
        }
    }

    fn read_through<V, E, F>(&self, map: &StringMap<V>, key: &str, build: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce() -> Result<V, E>,
    {
        let state = self.state();

        if state.is_active()
            && let Some(hit) = map.read().get(key).cloned()
        {
            self.stats.record_hit();
            return Ok(hit);
        }

        self.stats.record_miss();
        let value = build()?;

        match state {
            CacheState::AutoEnabled => {
                if map.read().len() >= self.threshold {
                    self.deactivate();
                    return Ok(value);
                }
                self.store(map, key, &value);
            }
            CacheState::ForcedEnabled => self.store(map, key, &value),
            CacheState::AutoDisabled | CacheState::ForcedDisabled => {}
        }

        Ok(value)
    }

    fn store<V: Clone>(&self, map: &StringMap<V>, key: &str, value: &V) {
        let mut guard = map.write();

        // A concurrent turn-off may have cleared the map since `state` was read.
        if self.state().is_active() {
            guard.insert(key.into(), value.clone());
        }
    }

    fn deactivate(&self) {
        let switched = self
            .state
            .compare_exchange(
                CacheState::AutoEnabled as u8,
                CacheState::AutoDisabled as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if !switched {
            return;
        }

        tracing::warn!(
            threshold = self.threshold,
            "pattern cache reached its size limit and has been turned off"
        );

        let mut tokens = self.tokens.write();
        tokens.clear();
        tokens.shrink_to_fit();
        drop(tokens);

        let mut segments = self.segments.write();
        segments.clear();
        segments.shrink_to_fit();
    }
}
