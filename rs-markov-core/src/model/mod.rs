//! Top-level module for the Markov-chain sentence generator.
//!
//! This module provides a word-level chain of order 1, 2 or 3, including:
//! - Sentinel-aware tokens and context keys (`Token`, `Context`)
//! - Frequency-weighted successor buckets (`Bucket`)
//! - Graph construction and random walk (`Chain`)
//! - Generation parameters (`GenerationOptions`)
//! - A named corpus registry (`Generator`)

/// Pure generation entry points and the corpus registry.
///
/// Every call builds a fresh chain, walks it once, then drops it.
pub mod generator;

/// Word-level chain of a fixed order.
///
/// Handles line ingestion and the weighted random walk.
pub mod chain;

/// Successor bucket of a single context key.
///
/// Stores one entry per observation and picks one uniformly.
pub mod bucket;

/// Context keys (n-grams of tokens).
pub mod context;

/// Corpus lines with sentence lookup.
pub mod corpus;

/// Sentinel tokens and the line tokenizer.
pub mod token;

/// Chain order selector.
pub mod order;

/// Generation parameters (order, retries, word cap).
pub mod options;
