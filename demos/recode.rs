// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use getopts::Options;

use textcodec::character::Unicode;
use textcodec::codec::utf16::{Utf16BeCodec, Utf16LeCodec};
use textcodec::codec::utf16_bom::Utf16BomCodec;
use textcodec::codec::utf8::Utf8Codec;
use textcodec::codec::utf8_bom::Utf8BomCodec;
use textcodec::iter;
use textcodec::status::Strict;

/// Recognized `--from-code`/`--to-code` names. Unlike the teacher's
/// WHATWG label registry, this demo only knows the codecs this crate
/// actually ships.
#[derive(Clone, Copy)]
enum CodecName {
    Utf8,
    Utf8Bom,
    Utf16Be,
    Utf16Le,
    Utf16Bom,
}

impl CodecName {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "utf-8" | "utf8" => Some(CodecName::Utf8),
            "utf-8-bom" | "utf8-bom" => Some(CodecName::Utf8Bom),
            "utf-16be" | "utf16be" => Some(CodecName::Utf16Be),
            "utf-16le" | "utf16le" => Some(CodecName::Utf16Le),
            "utf-16" | "utf16" | "utf-16-bom" => Some(CodecName::Utf16Bom),
            _ => None,
        }
    }
}

fn decode_to_code_points(name: CodecName, bytes: Vec<u8>) -> Result<Vec<u32>, String> {
    // The trivial codec's code unit is a code point directly, so the
    // input has to be interpreted as plain UTF-8 first to obtain one;
    // every other codec decodes straight from bytes.
    match name {
        CodecName::Utf8 => iter::forward::<Utf8Codec, _, Unicode, Strict>(bytes.into_iter())
            .map(|item| item.map(|ch| ch.code_point()).map_err(|e| e.to_string()))
            .collect(),
        CodecName::Utf8Bom => iter::forward::<Utf8BomCodec, _, Unicode, Strict>(bytes.into_iter())
            .map(|item| item.map(|ch| ch.code_point()).map_err(|e| e.to_string()))
            .collect(),
        CodecName::Utf16Be => iter::forward::<Utf16BeCodec, _, Unicode, Strict>(bytes.into_iter())
            .map(|item| item.map(|ch| ch.code_point()).map_err(|e| e.to_string()))
            .collect(),
        CodecName::Utf16Le => iter::forward::<Utf16LeCodec, _, Unicode, Strict>(bytes.into_iter())
            .map(|item| item.map(|ch| ch.code_point()).map_err(|e| e.to_string()))
            .collect(),
        CodecName::Utf16Bom => iter::forward::<Utf16BomCodec, _, Unicode, Strict>(bytes.into_iter())
            .map(|item| item.map(|ch| ch.code_point()).map_err(|e| e.to_string()))
            .collect(),
    }
}

fn encode_from_code_points(name: CodecName, code_points: Vec<u32>) -> Result<Vec<u8>, String> {
    fn encode_with<C>(code_points: Vec<u32>) -> Result<Vec<u8>, String>
    where
        C: textcodec::codec::Codec<CodeUnit = u8>,
    {
        let mut state = C::State::default();
        let mut sink: Vec<u8> = Vec::new();
        for cp in code_points {
            let ch: textcodec::character::Character<Unicode> = textcodec::character::Character::new(cp);
            if C::encode(&mut state, ch, &mut sink) != textcodec::status::EncodeStatus::NoError {
                let err = textcodec::status::encode_failure(format!(
                    "U+{cp:04X} cannot be represented in this encoding"
                ));
                return Err(err.to_string());
            }
        }
        Ok(sink)
    }

    match name {
        CodecName::Utf8 => encode_with::<Utf8Codec>(code_points),
        CodecName::Utf8Bom => encode_with::<Utf8BomCodec>(code_points),
        CodecName::Utf16Be => encode_with::<Utf16BeCodec>(code_points),
        CodecName::Utf16Le => encode_with::<Utf16LeCodec>(code_points),
        CodecName::Utf16Bom => encode_with::<Utf16BomCodec>(code_points),
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input encoding", "NAME");
    opts.optopt("t", "to-code", "set output encoding", "NAME");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = opts.parse(&args[1..]).map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        print!(
            "{}",
            opts.usage("Converts the character encoding of a file using textcodec.")
        );
        return Ok(());
    }

    let from = match matches.opt_str("f") {
        Some(name) => CodecName::parse(&name).ok_or_else(|| format!("unknown input encoding {name}"))?,
        None => CodecName::Utf8,
    };
    let to = match matches.opt_str("t") {
        Some(name) => CodecName::parse(&name).ok_or_else(|| format!("unknown output encoding {name}"))?,
        None => CodecName::Utf8,
    };

    let mut input_bytes = Vec::new();
    match matches.free.first().map(String::as_str) {
        Some("-") | None => {
            io::stdin().read_to_end(&mut input_bytes).map_err(|e| e.to_string())?;
        }
        Some(path) => {
            File::open(path)
                .and_then(|mut f| f.read_to_end(&mut input_bytes))
                .map_err(|e| e.to_string())?;
        }
    }

    let code_points = decode_to_code_points(from, input_bytes)?;
    let output_bytes = encode_from_code_points(to, code_points)?;

    match matches.opt_str("o").as_deref() {
        Some("-") | None => io::stdout().write_all(&output_bytes).map_err(|e| e.to_string())?,
        Some(path) => {
            File::create(path)
                .and_then(|mut f| f.write_all(&output_bytes))
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("recode: {e}");
            ExitCode::FAILURE
        }
    }
}
