//! Raw per-frame input sampling.
//!
//! Device state is polled once per tick into an [`sampler::InputFrame`] so the
//! camera rig and order systems read one consistent snapshot, including
//! pressed-this-frame edges, instead of subscribing to input callbacks.

pub mod sampler;
