use crc_params::{CrcModel, CrcParameters};

/// The parameter sets which are always available in [`Catalog::builtin`](super::Catalog::builtin).
///
/// The table lists the classic variants first, by width, followed by variants of the
/// CRC RevEng catalogue with less common register widths.
pub static BUILTIN_PARAMETERS: &[CrcParameters] = &[
    crc("CRC-32", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926),
    crc("CRC-32/BZIP2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF, 0xFC891918),
    crc("CRC-32/JAMCRC", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000, 0x340BC6D9),
    crc("CRC-32/MPEG-2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000, 0x0376E6E7),
    crc("CRC-32/POSIX", 32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF, 0x765E7680),
    crc("CRC-32/SATA", 32, 0x04C11DB7, 0x52325032, false, false, 0x00000000, 0xCF72AFE8),
    crc("CRC-32/XFER", 32, 0x000000AF, 0x00000000, false, false, 0x00000000, 0xBD0BE338),
    crc("CRC-32C", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283),
    crc("CRC-32D", 32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x87315576),
    crc("CRC-32Q", 32, 0x814141AB, 0x00000000, false, false, 0x00000000, 0x3010BF7F),
    crc("CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D),
    crc("CRC-16/AUG-CCITT", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC),
    crc("CRC-16/BUYPASS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8),
    crc("CRC-16/CCITT-FALSE", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1),
    crc("CRC-16/CDMA2000", 16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06),
    crc("CRC-16/DDS-110", 16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF),
    crc("CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007E),
    crc("CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007F),
    crc("CRC-16/DNP", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82),
    crc("CRC-16/EN-13757", 16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7),
    crc("CRC-16/GENIBUS", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E),
    crc("CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189),
    crc("CRC-16/MAXIM", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2),
    crc("CRC-16/MCRF4XX", 16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91),
    crc("CRC-16/MODBUS", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37),
    crc("CRC-16/RIELLO", 16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0),
    crc("CRC-16/T10-DIF", 16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB),
    crc("CRC-16/TELEDISK", 16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3),
    crc("CRC-16/TMS37157", 16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1),
    crc("CRC-16/USB", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8),
    crc("CRC-16/X-25", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E),
    crc("CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3),
    crc("CRC-A", 16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05),
    crc("CRC-8", 8, 0x07, 0x00, false, false, 0x00, 0xF4),
    crc("CRC-8/CDMA2000", 8, 0x9B, 0xFF, false, false, 0x00, 0xDA),
    crc("CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15),
    crc("CRC-8/DVB-S2", 8, 0xD5, 0x00, false, false, 0x00, 0xBC),
    crc("CRC-8/EBU", 8, 0x1D, 0xFF, true, true, 0x00, 0x97),
    crc("CRC-8/I-CODE", 8, 0x1D, 0xFD, false, false, 0x00, 0x7E),
    crc("CRC-8/ITU", 8, 0x07, 0x00, false, false, 0x55, 0xA1),
    crc("CRC-8/MAXIM", 8, 0x31, 0x00, true, true, 0x00, 0xA1),
    crc("CRC-8/ROHC", 8, 0x07, 0xFF, true, true, 0x00, 0xD0),
    crc("CRC-8/WCDMA", 8, 0x9B, 0x00, true, true, 0x00, 0x25),
    crc("CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19),
    // Further register widths
    crc("CRC-3/ROHC", 3, 0x03, 0x07, true, true, 0x00, 0x06),
    crc("CRC-4/G-704", 4, 0x03, 0x00, true, true, 0x00, 0x07),
    crc("CRC-6/DARC", 6, 0x19, 0x00, true, true, 0x00, 0x26),
    crc("CRC-7/MMC", 7, 0x09, 0x00, false, false, 0x00, 0x75),
    crc("CRC-10/ATM", 10, 0x233, 0x000, false, false, 0x000, 0x199),
    crc("CRC-11/FLEXRAY", 11, 0x385, 0x01A, false, false, 0x000, 0x5A3),
    crc("CRC-12/DECT", 12, 0x80F, 0x000, false, false, 0x000, 0xF5B),
    crc("CRC-15/CAN", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059E),
    crc("CRC-17/CAN-FD", 17, 0x1685B, 0x00000, false, false, 0x00000, 0x04F03),
    crc("CRC-21/CAN-FD", 21, 0x102899, 0x000000, false, false, 0x000000, 0x0ED841),
    crc("CRC-24/OPENPGP", 24, 0x864CFB, 0xB704CE, false, false, 0x000000, 0x21CF02),
    crc("CRC-24/BLE", 24, 0x00065B, 0x555555, true, true, 0x000000, 0xC25A56),
    crc("CRC-31/PHILIPS", 31, 0x04C11DB7, 0x7FFFFFFF, false, false, 0x7FFFFFFF, 0x0CE9E46C),
    crc("CRC-40/GSM", 40, 0x0004820009, 0x0000000000, false, false, 0xFFFFFFFFFF, 0xD4164FC646),
    crc("CRC-64/ECMA-182", 64, 0x42F0E1EBA9EA3693, 0x0000000000000000, false, false, 0x0000000000000000, 0x6C40DF5F0B497347),
    crc("CRC-64/GO-ISO", 64, 0x000000000000001B, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0xB90956C775A41001),
    crc("CRC-64/WE", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, false, false, 0xFFFFFFFFFFFFFFFF, 0x62EC59E3F1A4F00A),
    crc("CRC-64/XZ", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0x995DC9BBDF1939FA),
];

#[allow(clippy::too_many_arguments)]
const fn crc(
    name: &'static str,
    width: u8,
    poly: u64,
    init: u64,
    reflect_in: bool,
    reflect_out: bool,
    xorout: u64,
    check: u64,
) -> CrcParameters {
    CrcParameters::new_const(
        name,
        CrcModel::new_const(width, poly, init, reflect_in, reflect_out, xorout),
        check,
    )
}
