use proptest::{prelude::any, proptest};
use pull_decompress::{
    decompress_to_vec, BrotliDecoder, Decompressor, DeflateDecoder, ZlibDecoder,
};

mod utils;

proptest! {
    #[test]
    fn brotli_round_trip(ref input in any::<Vec<u8>>()) {
        let compressed = utils::brotli::compress(input);
        let output = decompress_to_vec::<BrotliDecoder>(&compressed).unwrap();
        assert_eq!(&output, input);
    }

    #[test]
    fn brotli_chunked_drain_equivalence(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
        capacity in 1..64usize,
    ) {
        let compressed = utils::brotli::compress(input);

        let mut decompressor: Decompressor<BrotliDecoder> =
            Decompressor::with_capacity(capacity);
        decompressor.set_input(&compressed).unwrap();
        let chunked = utils::drain_chunked(&mut decompressor, chunk_size);
        assert!(decompressor.finished());

        assert_eq!(&chunked, input);
        assert_eq!(chunked, decompress_to_vec::<BrotliDecoder>(&compressed).unwrap());
    }

    #[test]
    fn brotli_chunked_input_equivalence(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
    ) {
        let compressed = utils::brotli::compress(input);

        let mut decompressor: Decompressor<BrotliDecoder> = Decompressor::with_capacity(32);
        let mut chunks = compressed.chunks(chunk_size);
        let mut output = Vec::new();
        let mut buf = [0; 16];
        loop {
            if decompressor.needs_input() {
                match chunks.next() {
                    Some(chunk) => decompressor.set_input(chunk).unwrap(),
                    None => break,
                }
            }
            let n = decompressor.decompress(&mut buf).unwrap();
            output.extend_from_slice(&buf[..n]);
        }

        assert_eq!(&output, input);
        assert!(decompressor.finished());
    }

    #[test]
    fn deflate_round_trip(ref input in any::<Vec<u8>>()) {
        let compressed = utils::deflate::compress(input);
        let output = decompress_to_vec::<DeflateDecoder>(&compressed).unwrap();
        assert_eq!(&output, input);
    }

    #[test]
    fn deflate_chunked_drain_equivalence(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
        capacity in 1..64usize,
    ) {
        let compressed = utils::deflate::compress(input);

        let mut decompressor: Decompressor<DeflateDecoder> =
            Decompressor::with_capacity(capacity);
        decompressor.set_input(&compressed).unwrap();
        let chunked = utils::drain_chunked(&mut decompressor, chunk_size);
        assert!(decompressor.finished());

        assert_eq!(&chunked, input);
    }

    #[test]
    fn zlib_round_trip(ref input in any::<Vec<u8>>()) {
        let compressed = utils::zlib::compress(input);
        let output = decompress_to_vec::<ZlibDecoder>(&compressed).unwrap();
        assert_eq!(&output, input);
    }

    #[test]
    fn zlib_chunked_input_equivalence(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
    ) {
        let compressed = utils::zlib::compress(input);

        let mut decompressor: Decompressor<ZlibDecoder> = Decompressor::with_capacity(32);
        let mut chunks = compressed.chunks(chunk_size);
        let mut output = Vec::new();
        let mut buf = [0; 16];
        loop {
            if decompressor.needs_input() {
                match chunks.next() {
                    Some(chunk) => decompressor.set_input(chunk).unwrap(),
                    None => break,
                }
            }
            let n = decompressor.decompress(&mut buf).unwrap();
            output.extend_from_slice(&buf[..n]);
        }

        assert_eq!(&output, input);
        assert!(decompressor.finished());
    }
}
