//! Conformance tests for the observable view contracts.
//!
//! These tests exercise complete workflows through the public view API over
//! the in-memory engine: build objects, mutate them through typed views,
//! and read the consequences back through both the views and the raw
//! engine boundary.

#[cfg(test)]
mod tests {
    use crate::heap::TestHeap;
    use rov_core::{Engine, ListView, ObjectBox, RealVector, StrVector};

    // ========================================================================
    // Vector contracts
    // ========================================================================

    #[test]
    fn test_roundtrip_and_bounds_for_every_kind() {
        let heap = TestHeap::new();

        let mut reals = heap.real_vector(&[0.5, 1.5, 2.5]);
        reals.set(2, 9.5).unwrap();
        assert_eq!(reals.get(2).unwrap(), 9.5);
        assert!(reals.get(3).unwrap_err().is_out_of_bounds());

        let mut flags = heap.logical_vector(&[true, false]);
        flags.set(1, true).unwrap();
        assert!(flags.get(1).unwrap());

        let mut words = heap.str_vector(&["alpha", "beta"]);
        words.set(0, "gamma".to_string()).unwrap();
        assert_eq!(words.get(0).unwrap(), "gamma");
        assert!(words.set(2, "delta".to_string()).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_integer_scenario_end_to_end() {
        let heap = TestHeap::new();
        let mut v = heap.int_vector(&[10, 20, 30, 40, 50]);

        // 1. In-place overwrite through the view
        v.set(2, 99).unwrap();
        assert_eq!(v.get(2).unwrap(), 99);

        // 2. The write landed in runtime storage, not a copy
        assert_eq!(heap.engine().int_get(v.handle(), 2), 99);

        // 3. One past the end is a hard failure
        let err = v.get(5).unwrap_err();
        assert_eq!(err.error_type(), "out_of_bounds");
    }

    #[test]
    fn test_factor_level_lookups() {
        let heap = TestHeap::new();
        let f = heap.factor(&[1, 3, 2], &["low", "mid", "high"]);

        // Forward and reverse lookups agree on 1-based positions
        for (k, label) in [(1, "low"), (2, "mid"), (3, "high")] {
            assert_eq!(f.level_index_of(label), k);
            assert_eq!(f.level_label(k), label);
        }

        // Tolerant sentinels, never errors
        assert_eq!(f.level_index_of("absent"), 0);
        assert_eq!(f.level_label(0), "");
        assert_eq!(f.level_label(9), "");

        let plain = heap.int_vector(&[1, 2]);
        assert_eq!(plain.level_index_of("low"), 0);
    }

    // ========================================================================
    // Record contracts
    // ========================================================================

    #[test]
    fn test_record_field_roundtrip() {
        let heap = TestHeap::new();
        let payload = heap.real_vector(&[1.0, 2.0]);
        let mut record = ListView::alloc(heap.engine(), 2);

        record.set_slot_keyed(0, payload.handle(), "x").unwrap();
        assert!(record.has_key("x"));
        assert!(!record.has_key("missing"));

        let boxed = record.get_by_key("x").unwrap();
        assert_eq!(boxed.handle(), payload.handle());

        // The boxed slot converts back to a typed view over the same object
        let roundtrip = boxed.as_real_vector().unwrap();
        assert_eq!(roundtrip.get(1).unwrap(), 2.0);
    }

    #[test]
    fn test_record_built_from_heterogeneous_fields() {
        let heap = TestHeap::new();
        let codes = heap.int_vector(&[1, 2, 3]);
        let labels = heap.str_vector(&["a", "b", "c"]);
        let record = heap.record(&[("codes", codes.handle()), ("labels", labels.handle())]);

        assert_eq!(record.len(), 2);
        let codes_again = record.get_by_key("codes").unwrap().as_integer_vector().unwrap();
        assert_eq!(codes_again.get(2).unwrap(), 3);

        // Wrong-kind conversion of a field is a type mismatch, not a crash
        let err = record.get(1).unwrap().as_real_vector().unwrap_err();
        assert_eq!(err.error_type(), "type_mismatch");
    }

    #[test]
    fn test_rewrapping_a_record_preserves_keys() {
        let heap = TestHeap::new();
        let child = heap.int_vector(&[7]);
        let record = heap.record(&[("n", child.handle())]);

        let again = ListView::wrap(heap.engine(), record.handle()).unwrap();
        assert_eq!(again.get_by_key("n").unwrap().handle(), child.handle());
    }

    // ========================================================================
    // Matrix contracts
    // ========================================================================

    #[test]
    fn test_matrix_sentinel_sweep() {
        let heap = TestHeap::new();
        let mut m = heap.real_matrix(3, 2);

        // Write a distinct sentinel to every cell, then read all back:
        // no write may alias another cell.
        for i in 0..3 {
            for j in 0..2 {
                m.set(i, j, (100 * i + j) as f64).unwrap();
            }
        }
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m.get(i, j).unwrap(), (100 * i + j) as f64);
            }
        }
    }

    #[test]
    fn test_fresh_matrix_column_labels() {
        let heap = TestHeap::new();
        let mut m = heap.int_matrix(3, 2);
        m.set_column_label(1, "B").unwrap();

        let dimnames = heap
            .engine()
            .attribute(m.handle(), rov_core::Attr::DimNames)
            .unwrap();
        let dimnames = ListView::wrap(heap.engine(), dimnames).unwrap();
        let labels = StrVector::wrap(heap.engine(), dimnames.get(1).unwrap().handle()).unwrap();
        assert_eq!(labels.get(0).unwrap(), "");
        assert_eq!(labels.get(1).unwrap(), "B");
    }

    // ========================================================================
    // Box contracts
    // ========================================================================

    #[test]
    fn test_box_conversions_share_storage() {
        let heap = TestHeap::new();
        let v = heap.real_vector(&[4.0]);
        let boxed = ObjectBox::new(heap.engine(), v.handle());

        let mut view = boxed.as_real_vector().unwrap();
        view.set(0, 8.0).unwrap();

        // The original view observes the write: no copy was made
        assert_eq!(v.get(0).unwrap(), 8.0);
        assert!(RealVector::wrap(heap.engine(), v.handle()).is_ok());
    }
}
