use batchtrace_types::EventType;

/// Business-step markers in priority order. The first marker contained in the
/// lowercased business step decides the event type.
pub const BIZ_STEP_MARKERS: &[(&str, EventType)] = &[
    (":commissioning", EventType::Commissioning),
    (":manufacturing", EventType::Transformation),
    (":packing", EventType::Packing),
    (":shipping", EventType::Shipping),
    (":receiving", EventType::Receiving),
    (":inspecting", EventType::Observation),
    (":retail", EventType::Observation),
    (":storing", EventType::Observation),
];

/// Classify a raw business step into a canonical event type.
///
/// Matching is case-insensitive substring containment, so both
/// `urn:epcglobal:cbv:bizstep:shipping` and `https://ref.gs1.org/cbv/BizStep-shipping`
/// style prefixes work as long as the `:<step>` marker is present.
/// Absent, empty, or unrecognised steps fall back to `Commissioning`.
pub fn classify(biz_step: Option<&str>) -> EventType {
    let normalized = biz_step.unwrap_or_default().to_lowercase();

    BIZ_STEP_MARKERS
        .iter()
        .find(|(marker, _)| normalized.contains(marker))
        .map(|(_, kind)| *kind)
        .unwrap_or(EventType::Commissioning)
}
