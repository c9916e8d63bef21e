/// One entry from the mount table: attachment point and filesystem type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    pub path:    String,
    pub fs_type: String,
}
