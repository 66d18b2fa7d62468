//! Tiny hand-written cascades for tests.
//!
//! The single-stump ones have a 24x24 window and one feature worth
//! `bottom half - top half`.

pub const ACCEPT_ALL: &str = "1. 1.";
pub const REJECT_ALL: &str = "-1. -1.";

/// Three stages with comments and `<_>` lists, laid out like the stock
/// OpenCV frontal-face files. Every leaf is positive.
pub const STAGED_CASCADE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/haarcascade_staged.xml"
));

/// Stump with threshold 0 and the given leaf values.
pub fn cascade_xml(leaf_values: &str) -> String {
    stump_cascade_xml("0.", leaf_values)
}

/// Fires on windows that are clearly darker on top than on the bottom.
pub fn edge_cascade_xml() -> String {
    stump_cascade_xml("0.1", "-1. 1.")
}

fn stump_cascade_xml(node_threshold: &str, leaf_values: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<opencv_storage>
<cascade type_id="opencv-cascade-classifier"><stageType>BOOST</stageType>
  <featureType>HAAR</featureType>
  <height>24</height>
  <width>24</width>
  <stageParams>
    <maxWeakCount>1</maxWeakCount></stageParams>
  <featureParams>
    <maxCatCount>0</maxCatCount></featureParams>
  <stageNum>1</stageNum>
  <stages>
    <!-- stage 0 -->
    <_>
      <maxWeakCount>1</maxWeakCount>
      <stageThreshold>0.</stageThreshold>
      <weakClassifiers>
        <_>
          <internalNodes>
            0 -1 0 {node_threshold}</internalNodes>
          <leafValues>
            {leaf_values}</leafValues></_></weakClassifiers></_></stages>
  <features>
    <_>
      <rects>
        <_>
          0 0 24 24 -1.</_>
        <_>
          0 12 24 12 2.</_></rects></_></features></cascade>
</opencv_storage>
"#
    )
}
