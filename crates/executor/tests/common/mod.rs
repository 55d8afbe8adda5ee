//! Shared instruction encoders for integration tests.

#![allow(dead_code)]

pub fn add(rd: u8, rs: u8, rt: u8) -> u32 {
    ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11) | 0b00000100000
}

pub fn sub(rd: u8, rs: u8, rt: u8) -> u32 {
    ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11) | 0b00000100010
}

pub fn slt(rd: u8, rs: u8, rt: u8) -> u32 {
    ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11) | 0b00000101010
}

pub fn mul(rd: u8, rs: u8, rt: u8) -> u32 {
    (0b011100 << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11)
}

pub fn addi(rt: u8, rs: u8, imm: i16) -> u32 {
    (0b001000 << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u16 as u32)
}

pub fn ori(rt: u8, rs: u8, imm: i16) -> u32 {
    (0b001101 << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u16 as u32)
}

pub fn lui(rt: u8, imm: i16) -> u32 {
    (0b001111 << 26) | ((rt as u32) << 16) | (imm as u16 as u32)
}

pub fn beq(rs: u8, rt: u8, imm: i16) -> u32 {
    (0b000100 << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u16 as u32)
}

pub fn bne(rs: u8, rt: u8, imm: i16) -> u32 {
    (0b000101 << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u16 as u32)
}

pub fn syscall() -> u32 {
    0b00000001100
}
