bitflags::bitflags! {
    /// The 32 `general_profile_compatibility_flag[j]` bits, packed with
    /// flag 0 in the most significant bit.
    ///
    /// Flag `j` set indicates conformance to the profile with
    /// `profile_idc` equal to `j`. Only the profiles defined by
    /// ISO/IEC 23008-2 - A.3 are named here; the remaining bits are
    /// reserved but still round-trip through
    /// [`from_bits_retain`](Self::from_bits_retain).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ProfileCompatibilityFlags: u32 {
        /// Main profile (A.3.2)
        const Main = 1 << 30;
        /// Main 10 profile (A.3.3)
        const Main10 = 1 << 29;
        /// Main Still Picture profile (A.3.4)
        const MainStillPicture = 1 << 28;
        /// Format range extensions profiles (A.3.5)
        const FormatRangeExtensions = 1 << 27;
        /// High throughput profiles (A.3.6)
        const HighThroughput = 1 << 26;
        /// Screen content coding extensions profiles (A.3.7)
        const ScreenContentCoding = 1 << 22;
        /// High throughput screen content coding extensions profiles (A.3.8)
        const HighThroughputScreenContentCoding = 1 << 20;
    }
}
