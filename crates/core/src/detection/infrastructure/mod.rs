pub mod cascade_resolver;
pub mod opencv_cascade_detector;
#[cfg(test)]
pub(crate) mod test_cascades;
