//! Utilities for working with ID3v2 integers and unsynchronized content

pub mod synchsafe;
