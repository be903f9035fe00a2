//! End-to-end tests for the assist gateway live under `tests/`.
