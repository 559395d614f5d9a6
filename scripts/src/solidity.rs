//! Definitions of Solidity functions & events used during deployment

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Deployer {
        event Deployed(address indexed addr, uint256 salt);

        function deploy(bytes memory code, uint256 salt) external payable returns (address);
    }
}

sol! {
    #[allow(missing_docs)]
    contract AddressProvider {
        constructor(address governance);
    }
}
