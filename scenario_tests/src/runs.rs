//! Whole-run scenarios over the standard block set
