//! Integration tests for the async cache front.

mod async_cache {
    mod fifo;
    mod lru;
    mod tlru;
}
