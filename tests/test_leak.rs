//! Kept in its own binary so no other test opens descriptors while counting.

use tun_lifecycle::{ErrorKind, TunBuilder};

fn open_descriptors() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn failed_allocation_closes_descriptors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let before = open_descriptors();
    for _ in 0..32 {
        let err = TunBuilder::new()
            .name("leaktun0")
            .control_path("/dev/null")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);

        let err = TunBuilder::new()
            .name("leaktun0")
            .control_path("/nonexistent/tun")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);

        let err = TunBuilder::new()
            .name("toolongnameforinterfac")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
    assert_eq!(open_descriptors(), before);
}
