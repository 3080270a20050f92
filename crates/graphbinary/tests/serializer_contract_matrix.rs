//! Header validation shared by every registered serializer.

use graphbinary::serializers::GraphBinarySerializer;
use graphbinary::{DataType, Dispatcher, Error, GValue};

fn registered() -> Vec<DataType> {
    Dispatcher::global().data_types().collect()
}

#[test]
fn every_serializer_rejects_missing_and_empty_buffers() {
    let dispatcher = Dispatcher::global();
    for data_type in registered() {
        let serializer = dispatcher.serializer_for_code(data_type.code()).unwrap();
        for fully_qualified in [true, false] {
            assert_eq!(
                serializer.read_gvalue(None, fully_qualified, dispatcher).err(),
                Some(Error::MissingBuffer),
                "{data_type}"
            );
            assert_eq!(
                serializer.read_gvalue(Some(&[]), fully_qualified, dispatcher).err(),
                Some(Error::EmptyBuffer),
                "{data_type}"
            );
        }
    }
}

#[test]
fn every_serializer_validates_marker_and_flag() {
    let dispatcher = Dispatcher::global();
    for data_type in registered() {
        let serializer = dispatcher.serializer_for_code(data_type.code()).unwrap();
        let code = data_type.code();
        let wrong = code.wrapping_add(1);

        assert_eq!(
            serializer.read_gvalue(Some(&[wrong, 0x00]), true, dispatcher).err(),
            Some(Error::UnexpectedTypeCode {
                expected: data_type,
                actual: wrong
            }),
            "{data_type}"
        );
        assert_eq!(
            serializer.read_gvalue(Some(&[code]), true, dispatcher).err(),
            Some(Error::MissingPresenceFlag),
            "{data_type}"
        );
        assert_eq!(
            serializer.read_gvalue(Some(&[code, 0x10]), true, dispatcher).err(),
            Some(Error::UnexpectedPresenceFlag(0x10)),
            "{data_type}"
        );

        let null = serializer.read_gvalue(Some(&[code, 0x01, 0xaa]), true, dispatcher).unwrap();
        assert_eq!(null.len, 2, "{data_type}");
    }
}

#[test]
fn every_serializer_roundtrips_its_null() {
    let dispatcher = Dispatcher::global();
    let mut writer = graphbinary::Writer::new();
    for data_type in registered() {
        let serializer = dispatcher.serializer_for_code(data_type.code()).unwrap();
        serializer
            .write_gvalue(&GValue::Null, true, &mut writer, dispatcher)
            .unwrap();
        let bytes = writer.flush();
        assert_eq!(bytes, vec![data_type.code(), 0x01], "{data_type}");
    }
}

#[test]
fn every_payload_reports_short_input() {
    let dispatcher = Dispatcher::global();
    for data_type in registered() {
        if data_type == DataType::UNSPECIFIED_NULL {
            continue;
        }
        let serializer = dispatcher.serializer_for_code(data_type.code()).unwrap();
        let result = serializer.read_gvalue(Some(&[data_type.code(), 0x00]), true, dispatcher);
        assert!(
            matches!(result, Err(Error::UnexpectedValueLength { data_type: dt, remaining: 0, .. }) if dt == data_type),
            "{data_type}: {result:?}"
        );
    }
}
