//! # Memory Request Tests
//!
//! Natural-alignment checks and the annotations the translate paths write
//! back into a request.

use mipsim_core::common::{MemRequest, PhysAddr, VirtAddr};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x1000, 4, false)]
#[case(0x1002, 4, true)]
#[case(0x1001, 2, true)]
#[case(0x1002, 2, false)]
#[case(0x1003, 1, false)]
#[case(0x1000, 8, false)]
// 0x1004 is aligned for 4-byte but not 8-byte accesses.
#[case(0x1004, 8, true)]
fn natural_alignment(#[case] vaddr: u64, #[case] size: usize, #[case] misaligned: bool) {
    let req = MemRequest::new(VirtAddr::new(vaddr), size, 0);
    assert_eq!(req.is_misaligned(), misaligned);
}

#[test]
fn zero_width_request_is_aligned() {
    let req = MemRequest::new(VirtAddr::new(0x1003), 0, 0);
    assert!(!req.is_misaligned());
}

#[test]
fn new_request_has_no_translation_yet() {
    let req = MemRequest::new(VirtAddr::new(0x2000), 4, 5);
    assert_eq!(req.vaddr(), VirtAddr::new(0x2000));
    assert_eq!(req.asid(), 5);
    assert_eq!(req.paddr, PhysAddr::new(0));
    assert!(!req.uncacheable);
}

#[test]
fn translation_annotations_are_written_back() {
    let mut req = MemRequest::new(VirtAddr::new(0xA000_0040), 4, 0);
    req.set_paddr(PhysAddr::new(0x40));
    req.set_uncacheable();
    assert_eq!(req.paddr.val(), 0x40);
    assert!(req.uncacheable);
}
