//! Workspace root package (hosts rusty-hook configuration only).
