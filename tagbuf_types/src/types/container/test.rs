#[cfg(test)]
mod test {
    use super::super::*;
    use crate::serde::{CodecError, SequenceValue, StringValue};
    use std::io::Cursor;

    fn gen_container() -> Container {
        let mut cont = Container::new();
        cont.push(42u64);
        cont.push(0.5f64);
        cont.push("hi");
        cont.push(SequenceValue::from_iter([
            Any::from(1u64),
            Any::from(vec![Any::from("nested"), Any::from(vec![Any::from(2u64)])]),
        ]));
        cont.push(StringValue::from(vec![0xC3u8, 0x28]));
        cont
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let cont = Container::new();
        let buf = cont.encode();
        assert_eq!(vec![0u8; 8], buf);
        assert_eq!(buf.len(), cont.encoded_len());

        let decoded = Container::decode(&buf)?;
        assert!(decoded.is_empty());
        assert_eq!(cont, decoded);

        Ok(())
    }

    #[test]
    fn round_trip_preserves_order() -> anyhow::Result<()> {
        let cont = gen_container();
        let buf = cont.encode();
        assert_eq!(buf.len(), cont.encoded_len());

        let decoded = Container::decode(&buf)?;
        assert_eq!(cont, decoded);
        assert_eq!(5, decoded.len());
        assert_eq!(
            cont.iter().map(Any::tag).collect::<Vec<_>>(),
            decoded.iter().map(Any::tag).collect::<Vec<_>>()
        );
        assert_eq!(buf, decoded.encode());

        let mut reversed = cont.clone().into_values();
        reversed.reverse();
        assert_ne!(cont, Container::from(reversed));

        Ok(())
    }

    #[test]
    fn truncation_never_succeeds() {
        let buf = gen_container().encode();
        for cut in 0..buf.len() {
            match Container::decode(&buf[..cut]) {
                Err(CodecError::TruncatedBuffer { .. }) => (),
                res => panic!("cut {cut} decoded to {res:?}"),
            }
        }
    }

    #[test]
    fn encode_into_appends() {
        let cont = Container::from_iter([1u64, 2u64]);
        let mut buf = vec![0xEE];
        let w_len = cont.encode_into(&mut buf);
        assert_eq!(1 + *w_len, buf.len());
        assert_eq!(&cont.encode()[..], &buf[1..]);
    }

    #[test]
    fn extend_and_iterate() {
        let mut cont = Container::new();
        cont.extend(["a", "b"]);
        cont.extend([Any::from(3u64)]);

        let vals = (&cont).into_iter().cloned().collect::<Vec<_>>();
        assert_eq!(vec![Any::from("a"), Any::from("b"), Any::from(3u64)], vals);
        assert_eq!(vals, cont.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn io_adapters() -> anyhow::Result<()> {
        let cont = gen_container();

        let mut sink = vec![];
        let w_len = cont.write_to(&mut sink)?;
        assert_eq!(sink.len(), *w_len);

        let read = Container::read_from(&mut Cursor::new(&sink))?;
        assert_eq!(cont, read);

        sink.truncate(sink.len() - 1);
        let err = Container::read_from(&mut Cursor::new(&sink)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::TruncatedBuffer { .. })
        ));

        Ok(())
    }
}
