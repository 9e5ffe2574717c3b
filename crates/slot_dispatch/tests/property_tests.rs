use parking_lot::Mutex as PlMutex;
use proptest::prelude::*;
use slot_dispatch::{Hub, HubConfig, Signal, Slot};
use std::sync::Arc;
use std::time::Duration;

proptest! {
    /// Events delivered through the same Listener are totally ordered by
    /// mutex acquisition order; a single-threaded emitter therefore sees
    /// its own emission order preserved end to end.
    #[test]
    fn single_emitter_sequence_is_observed_in_order(values in prop::collection::vec(0i32..1000, 0..40)) {
        let hub = Hub::new(HubConfig::new(Duration::from_millis(200)));
        let listener = hub.make_listener::<i32>();
        let received = Arc::new(PlMutex::new(Vec::new()));
        let received_body = Arc::clone(&received);
        let listener_body = Arc::clone(&listener);
        let count = values.len();

        let slot = Slot::new(async move {
            for _ in 0..count {
                let v = listener_body.recv().await;
                received_body.lock().push(v);
            }
        });
        hub.bind_slot(&slot);
        slot.spawn();

        let signal = Signal::new();
        signal.connect(&listener);
        for v in &values {
            prop_assert!(signal.emit(*v));
        }

        prop_assert_eq!(received.lock().clone(), values);
    }
}
