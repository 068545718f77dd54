#[cfg(test)]
mod tests {
    use crate::protocol::*;
    use crate::test_helpers::*;

    #[test]
    fn test_boundary_detection_truncated_third_record() {
        // Two complete records followed by 3 stray bytes of a third:
        // exactly 2 records come out and the tail is never read.
        let mut buf = datagram(&[encode_newlink(1, "lo"), encode_newlink(2, "eth0")]);
        buf.extend_from_slice(&[0x28, 0x00, 0x00]);

        let records: Vec<_> = MessageIter::new(&buf).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(
            link_entry(&records[0]),
            Some(LinkEntry { index: 1, name: "lo".into() })
        );
        assert_eq!(
            link_entry(&records[1]),
            Some(LinkEntry { index: 2, name: "eth0".into() })
        );
    }

    #[test]
    fn test_record_length_exceeding_buffer_is_not_consumed() {
        // Header is complete but claims more payload than the buffer
        // holds; that is "more data coming", not a record.
        let mut record = encode_noop();
        record[0..4].copy_from_slice(&100u32.to_ne_bytes());
        assert_eq!(MessageIter::new(&record).count(), 0);
    }

    #[test]
    fn test_record_length_below_header_size_stops_iteration() {
        let good = encode_noop();
        let mut bad = encode_noop();
        bad[0..4].copy_from_slice(&8u32.to_ne_bytes());

        let buf = datagram(&[bad, good]);
        // A nonsense length field poisons the rest of the buffer; the
        // cursor cannot know where the next record starts.
        assert_eq!(MessageIter::new(&buf).count(), 0);
    }

    #[test]
    fn test_empty_and_short_buffers() {
        assert_eq!(MessageIter::new(&[]).count(), 0);
        assert_eq!(MessageIter::new(&[0u8; NLMSG_HDRLEN - 1]).count(), 0);
        assert_eq!(AttrIter::new(&[]).count(), 0);
        assert_eq!(AttrIter::new(&[0u8; RTA_HDRLEN - 1]).count(), 0);
    }

    #[test]
    fn test_attr_alignment_odd_length_value() {
        // "eth0" + NUL is 5 bytes -> attribute length 9, padded to 12.
        // A second attribute must still be found at the padded offset.
        let attrs = datagram(&[
            encode_attr(IFLA_IFNAME, b"eth0\0"),
            encode_attr(99, &[0xaa, 0xbb]),
        ]);

        let parsed: Vec<_> = AttrIter::new(&attrs).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].kind, InnerType::IfName);
        assert_eq!(parsed[0].value, b"eth0\0");
        assert_eq!(parsed[1].kind, InnerType::Other(99));
        assert_eq!(parsed[1].value, &[0xaa, 0xbb]);
    }

    #[test]
    fn test_unknown_attrs_skipped_before_ifname() {
        let mut payload = vec![0u8; IFINFO_LEN];
        payload[4..8].copy_from_slice(&7i32.to_ne_bytes());
        payload.extend_from_slice(&encode_attr(1, &[0u8; 6])); // IFLA_ADDRESS
        payload.extend_from_slice(&encode_attr(4, &1500u32.to_ne_bytes())); // IFLA_MTU
        payload.extend_from_slice(&encode_attr(IFLA_IFNAME, b"wlan0\0"));
        let record = encode_outer(RTM_NEWLINK, 0, &payload);

        let msg = MessageIter::new(&record).next().unwrap();
        assert_eq!(
            link_entry(&msg),
            Some(LinkEntry { index: 7, name: "wlan0".into() })
        );
    }

    #[test]
    fn test_newlink_without_ifname_yields_no_entry() {
        let mut payload = vec![0u8; IFINFO_LEN];
        payload.extend_from_slice(&encode_attr(4, &1500u32.to_ne_bytes()));
        let record = encode_outer(RTM_NEWLINK, 0, &payload);

        let msg = MessageIter::new(&record).next().unwrap();
        assert_eq!(link_entry(&msg), None);
    }

    #[test]
    fn test_newlink_payload_shorter_than_descriptor() {
        let record = encode_outer(RTM_NEWLINK, 0, &[0u8; IFINFO_LEN - 4]);
        let msg = MessageIter::new(&record).next().unwrap();
        assert_eq!(link_entry(&msg), None);
    }

    #[test]
    fn test_non_newlink_records_yield_no_entry() {
        for record in [encode_done(), encode_error(), encode_noop()] {
            let msg = MessageIter::new(&record).next().unwrap();
            assert_eq!(link_entry(&msg), None);
        }
    }

    #[test]
    fn test_ifname_nul_termination() {
        assert_eq!(ifname_from_value(b"lo\0").as_deref(), Some("lo"));
        // Trailing garbage after the NUL is dropped
        assert_eq!(ifname_from_value(b"lo\0xx").as_deref(), Some("lo"));
        // Kernel always terminates, but an unterminated value still parses
        assert_eq!(ifname_from_value(b"eth0").as_deref(), Some("eth0"));
        assert_eq!(ifname_from_value(b"\0").as_deref(), Some(""));
        assert_eq!(ifname_from_value(&[0xff, 0xfe, 0x00]), None);
    }

    #[test]
    fn test_link_info_fields() {
        let mut payload = vec![0u8; IFINFO_LEN];
        payload[0] = 17; // AF_PACKET
        payload[2..4].copy_from_slice(&772u16.to_ne_bytes()); // ARPHRD_LOOPBACK
        payload[4..8].copy_from_slice(&1i32.to_ne_bytes());
        payload[8..12].copy_from_slice(&0x49u32.to_ne_bytes());
        let record = encode_outer(RTM_NEWLINK, 0, &payload);

        let msg = MessageIter::new(&record).next().unwrap();
        let (info, attrs) = parse_link_info(msg.payload).unwrap();
        assert_eq!(info.family, 17);
        assert_eq!(info.device_type, 772);
        assert_eq!(info.index, 1);
        assert_eq!(info.flags, 0x49);
        assert_eq!(info.change, 0);
        assert_eq!(attrs.count(), 0);
    }
}
