/// A widget mounted in the scene tree, as seen by the jump resolver.
///
/// Concrete widget types live in the host application; the resolver only
/// needs a stable id and the jump capability probe.
pub trait Widget {
    /// Short type name, used for log events.
    fn type_name(&self) -> &'static str;

    /// Caller-assigned stable id, constant for the widget's mounted lifetime.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Capability probe: widgets that carry their own jump key opt in by
    /// returning `Some(self)`.
    fn as_jumpable(&self) -> Option<&dyn Jumpable> {
        None
    }
}

/// A widget which declares its own jump key, without appearing in the
/// static assignment table.
pub trait Jumpable {
    fn jump_key(&self) -> &str;
}
